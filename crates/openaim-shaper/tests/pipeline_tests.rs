//! End-to-end scenarios for the shaping pipeline.

use approx::assert_relative_eq;
use openaim_curves::{Axis, Knot, ResponseTable};
use openaim_shaper::{AimAngles, RateShaper, ShaperConfig, ShaperError};

fn must<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("unexpected error: {:?}", e),
    }
}

#[test]
fn test_half_deflection_turn_reference_values() {
    // Half deflection left, default 45 deg/s base rate, one 60 Hz-ish frame.
    let shaper = must(RateShaper::new(ShaperConfig::default()));
    let dt = 0.016667;

    let delta = shaper.shape(Axis::Turn, -0.5, dt);
    assert!(delta < 0.0);

    let expected = ResponseTable::turn().evaluate(50.0) * 45.0 * dt;
    assert_relative_eq!(delta.abs(), expected, max_relative = 1e-12);
}

#[test]
fn test_calibrated_knot_values_flow_through_pipeline() {
    // A raw sample that lands exactly on a calibration knot must reproduce
    // the calibrated output, scaled only by rate and frame delta.
    let shaper = must(RateShaper::new(
        ShaperConfig::default().with_deadzone(0.0),
    ));
    let dt = 1.0;

    // 64.38356164 / 100 deflection on the look-up axis.
    let raw = 0.6438356164;
    let delta = shaper.shape(Axis::LookUp, raw, dt);
    assert_relative_eq!(delta, 0.3555385401 * 45.0, max_relative = 1e-9);
}

#[test]
fn test_sustained_full_deflection_rotates_at_base_rate() {
    // Sixty frames of full right deflection at 60 Hz is one second of
    // rotation at the base rate.
    let shaper = must(RateShaper::new(ShaperConfig::new(90.0, 45.0)));
    let dt = 1.0 / 60.0;
    let mut aim = AimAngles::default();

    for _ in 0..60 {
        aim.apply(shaper.shape_frame(1.0, 0.0, dt));
    }

    assert_relative_eq!(aim.yaw_deg, 90.0, max_relative = 1e-9);
    assert_eq!(aim.pitch_deg, 0.0);
}

#[test]
fn test_look_inversion_unaffected_by_shaping() {
    // Pushing up then down by the same amount returns pitch to level.
    let shaper = must(RateShaper::new(ShaperConfig::default()));
    let dt = 1.0 / 60.0;
    let mut aim = AimAngles::default();

    for _ in 0..30 {
        aim.apply(shaper.shape_frame(0.0, 0.8, dt));
    }
    assert!(aim.pitch_deg > 0.0);

    for _ in 0..30 {
        aim.apply(shaper.shape_frame(0.0, -0.8, dt));
    }
    assert_relative_eq!(aim.pitch_deg, 0.0, epsilon = 1e-9);
}

#[test]
fn test_profile_json_drives_shaper() {
    let json = r#"{
        "base_turn_rate": 120.0,
        "base_look_up_rate": 60.0,
        "deadzone": 0.2
    }"#;
    let config: ShaperConfig = must(serde_json::from_str(json));
    let shaper = must(RateShaper::new(config));
    let dt = 0.01;

    // Inside the profile's deadzone.
    assert_eq!(shaper.shape(Axis::Turn, 0.15, dt), 0.0);

    // Full deflection uses the per-axis profile rates.
    assert_relative_eq!(
        shaper.shape(Axis::Turn, 1.0, dt),
        120.0 * dt,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        shaper.shape(Axis::LookUp, -1.0, dt),
        -60.0 * dt,
        max_relative = 1e-12
    );
}

#[test]
fn test_invalid_profile_rejected_before_use() {
    let json = r#"{
        "base_turn_rate": 0.0,
        "base_look_up_rate": 45.0,
        "deadzone": 0.1
    }"#;
    let config: ShaperConfig = must(serde_json::from_str(json));
    assert!(matches!(
        RateShaper::new(config),
        Err(ShaperError::InvalidBaseRate { .. })
    ));
}

#[test]
fn test_custom_calibration_round_trip_into_shaper() {
    let knots = vec![
        Knot::new(25.0, 0.05),
        Knot::new(50.0, 0.2),
        Knot::new(75.0, 0.55),
    ];
    let table = must(ResponseTable::from_knots(knots));
    let json = must(serde_json::to_string(&table));
    let restored: ResponseTable = must(serde_json::from_str(&json));

    let shaper = must(RateShaper::new(
        ShaperConfig::default().with_deadzone(0.0),
    ))
    .with_table(Axis::Turn, restored);

    assert_relative_eq!(
        shaper.shape(Axis::Turn, 0.5, 1.0),
        0.2 * 45.0,
        max_relative = 1e-12
    );
}
