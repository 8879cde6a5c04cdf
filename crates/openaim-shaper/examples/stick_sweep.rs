//! Stick Sweep Demo
//!
//! Sweeps a virtual stick through its deflection range at a fixed frame
//! rate and logs the shaped yaw/pitch increments plus the accumulated
//! camera orientation. Run with:
//!
//!   RUST_LOG=debug cargo run -p openaim-shaper --example stick_sweep

use openaim_shaper::prelude::*;
use tracing::info;

fn main() -> Result<(), ShaperError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ShaperConfig::default();
    let shaper = RateShaper::new(config)?;
    info!(?config, "sweeping stick at 60 Hz");

    let dt = 1.0 / 60.0;
    let mut aim = AimAngles::default();

    for step in -20..=20i32 {
        let turn = f64::from(step) / 20.0;
        let look_up = f64::from(step) / 40.0;

        let delta = shaper.shape_frame(turn, look_up, dt);
        aim.apply(delta);

        info!(
            turn,
            look_up,
            yaw_delta = delta.yaw_deg,
            pitch_delta = delta.pitch_deg,
            yaw = aim.yaw_deg,
            pitch = aim.pitch_deg,
            "frame"
        );
    }

    Ok(())
}
