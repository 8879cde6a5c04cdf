//! Per-frame rate shaping.

use openaim_curves::{Axis, ResponseTable};
use tracing::debug;

use crate::ShaperResult;
use crate::aim::AimDelta;
use crate::config::ShaperConfig;

/// Turns raw stick samples into per-frame rotation increments.
///
/// The shaper owns one response table per axis. Tables and configuration are
/// fixed at construction; afterwards the shaper is read-only and safe to
/// call once per axis per frame from the input-polling step.
///
/// # Example
///
/// ```
/// use openaim_curves::Axis;
/// use openaim_shaper::{RateShaper, ShaperConfig};
///
/// let shaper = RateShaper::new(ShaperConfig::default())?;
///
/// // Half deflection left at a 60 Hz frame.
/// let yaw = shaper.shape(Axis::Turn, -0.5, 1.0 / 60.0);
/// assert!(yaw < 0.0);
/// # Ok::<(), openaim_shaper::ShaperError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RateShaper {
    config: ShaperConfig,
    tables: [ResponseTable; 2],
}

impl RateShaper {
    /// Creates a shaper with the shipped per-axis calibrations.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::ShaperError`] if the configuration is invalid.
    pub fn new(config: ShaperConfig) -> ShaperResult<Self> {
        config.validate()?;
        debug!(
            base_turn_rate = config.base_turn_rate,
            base_look_up_rate = config.base_look_up_rate,
            deadzone = config.deadzone,
            "rate shaper initialized"
        );
        Ok(Self {
            config,
            tables: [ResponseTable::turn(), ResponseTable::look_up()],
        })
    }

    /// Replaces the response table for one axis with a custom calibration.
    pub fn with_table(mut self, axis: Axis, table: ResponseTable) -> Self {
        self.tables[axis.index()] = table;
        self
    }

    /// The configuration this shaper was built with.
    pub fn config(&self) -> &ShaperConfig {
        &self.config
    }

    /// The response table used for the given axis.
    pub fn table(&self, axis: Axis) -> &ResponseTable {
        &self.tables[axis.index()]
    }

    /// Shapes one raw axis sample into a rotation increment in degrees.
    ///
    /// The raw sample is clamped to `[-1, 1]`. Samples whose magnitude is at
    /// or below the deadzone yield exactly zero. Otherwise the magnitude is
    /// rescaled to the table domain, shaped through the axis curve, given
    /// back the sample's sign, and scaled by the axis base rate and
    /// `delta_seconds`. The output sign always matches the input sign; a
    /// sample of exactly zero yields exactly zero.
    #[inline]
    pub fn shape(&self, axis: Axis, raw_sample: f64, delta_seconds: f64) -> f64 {
        let raw = raw_sample.clamp(-1.0, 1.0);
        let magnitude = raw.abs();
        if magnitude <= self.config.deadzone {
            return 0.0;
        }

        // Zero counts as non-negative; a zero sample never reaches this
        // point because the deadzone test above already rejected it.
        let sign = if raw < 0.0 { -1.0 } else { 1.0 };
        let shaped = self.tables[axis.index()].evaluate(magnitude * 100.0);

        shaped * sign * self.config.base_rate(axis) * delta_seconds
    }

    /// Shapes both axis samples for one frame.
    pub fn shape_frame(&self, turn_sample: f64, look_up_sample: f64, delta_seconds: f64) -> AimDelta {
        AimDelta {
            yaw_deg: self.shape(Axis::Turn, turn_sample, delta_seconds),
            pitch_deg: self.shape(Axis::LookUp, look_up_sample, delta_seconds),
        }
    }
}

impl Default for RateShaper {
    fn default() -> Self {
        Self {
            config: ShaperConfig::default(),
            tables: [ResponseTable::turn(), ResponseTable::look_up()],
        }
    }
}
