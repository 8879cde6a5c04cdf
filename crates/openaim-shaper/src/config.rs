//! Shaper configuration.

use openaim_curves::Axis;
use serde::{Deserialize, Serialize};

use crate::{ShaperError, ShaperResult};

/// Per-controller rate-shaping configuration.
///
/// Set once when the controlling actor initializes and read on every frame
/// afterwards. The base rates give the rotation speed at full stick
/// deflection; the deadzone is the fraction of the input range at or below
/// which a sample is ignored, applied uniformly to both axes.
///
/// # Example
///
/// ```
/// use openaim_shaper::ShaperConfig;
///
/// let config = ShaperConfig::new(60.0, 45.0).with_deadzone(0.15);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShaperConfig {
    /// Yaw rate in degrees per second at full deflection.
    pub base_turn_rate: f64,
    /// Pitch rate in degrees per second at full deflection.
    pub base_look_up_rate: f64,
    /// Fraction of the input range at or below which a sample is ignored.
    pub deadzone: f64,
}

impl Default for ShaperConfig {
    fn default() -> Self {
        Self {
            base_turn_rate: 45.0,
            base_look_up_rate: 45.0,
            deadzone: 0.1,
        }
    }
}

impl ShaperConfig {
    /// Creates a configuration with the given base rates and the default
    /// deadzone.
    pub fn new(base_turn_rate: f64, base_look_up_rate: f64) -> Self {
        Self {
            base_turn_rate,
            base_look_up_rate,
            ..Self::default()
        }
    }

    /// Sets the deadzone fraction.
    pub fn with_deadzone(mut self, deadzone: f64) -> Self {
        self.deadzone = deadzone;
        self
    }

    /// The base rate configured for the given axis, in degrees per second.
    #[inline]
    pub fn base_rate(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Turn => self.base_turn_rate,
            Axis::LookUp => self.base_look_up_rate,
        }
    }

    /// Checks that both base rates are finite and positive and that the
    /// deadzone lies in `[0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns a [`ShaperError`] naming the first invalid field.
    pub fn validate(&self) -> ShaperResult<()> {
        for axis in Axis::ALL {
            let rate = self.base_rate(axis);
            if !rate.is_finite() || rate <= 0.0 {
                return Err(ShaperError::InvalidBaseRate { axis, rate });
            }
        }
        if !self.deadzone.is_finite() || !(0.0..1.0).contains(&self.deadzone) {
            return Err(ShaperError::InvalidDeadzone(self.deadzone));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_controller_defaults() {
        let config = ShaperConfig::default();
        assert!((config.base_turn_rate - 45.0).abs() < f64::EPSILON);
        assert!((config.base_look_up_rate - 45.0).abs() < f64::EPSILON);
        assert!((config.deadzone - 0.1).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_base_rate_per_axis() {
        let config = ShaperConfig::new(60.0, 30.0);
        assert!((config.base_rate(Axis::Turn) - 60.0).abs() < f64::EPSILON);
        assert!((config.base_rate(Axis::LookUp) - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_with_deadzone() {
        let config = ShaperConfig::default().with_deadzone(0.25);
        assert!((config.deadzone - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validate_rejects_non_positive_rate() {
        let config = ShaperConfig::new(0.0, 45.0);
        assert!(matches!(
            config.validate(),
            Err(ShaperError::InvalidBaseRate {
                axis: Axis::Turn,
                ..
            })
        ));

        let config = ShaperConfig::new(45.0, -1.0);
        assert!(matches!(
            config.validate(),
            Err(ShaperError::InvalidBaseRate {
                axis: Axis::LookUp,
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite_rate() {
        let config = ShaperConfig::new(f64::NAN, 45.0);
        assert!(config.validate().is_err());

        let config = ShaperConfig::new(f64::INFINITY, 45.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_deadzone() {
        for deadzone in [-0.1, 1.0, 1.5, f64::NAN] {
            let config = ShaperConfig::default().with_deadzone(deadzone);
            assert!(
                matches!(config.validate(), Err(ShaperError::InvalidDeadzone(_))),
                "deadzone {} accepted",
                deadzone
            );
        }
    }

    #[test]
    fn test_validate_accepts_zero_deadzone() {
        let config = ShaperConfig::default().with_deadzone(0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = ShaperConfig::new(72.5, 38.0).with_deadzone(0.12);
        let json = serde_json::to_string(&config).expect("serialization failed");
        let back: ShaperConfig = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(config, back);
    }

    #[test]
    fn test_deserialization_from_profile_json() {
        let json = r#"{
            "base_turn_rate": 45.0,
            "base_look_up_rate": 45.0,
            "deadzone": 0.1
        }"#;
        let config: ShaperConfig = serde_json::from_str(json).expect("deserialization failed");
        assert_eq!(config, ShaperConfig::default());
    }
}
