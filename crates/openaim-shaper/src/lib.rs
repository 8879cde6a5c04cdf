//! Rate Shaping for OpenAim Stick Input
//!
//! This crate turns raw analog stick samples into per-frame yaw/pitch
//! rotation increments. For each axis the pipeline is:
//!
//! 1. Clamp the raw sample to `[-1, 1]`
//! 2. Deadzone pre-filter (samples at or below the threshold yield zero)
//! 3. Curve lookup through the axis response table
//! 4. Sign restoration (output sign always matches input sign)
//! 5. Scaling by the configured base rate and the frame delta
//!
//! # Hot-Path Safety
//!
//! [`RateShaper::shape`] runs once per axis per simulation frame:
//! - No heap allocations
//! - No syscalls or I/O
//! - Bounded execution time
//! - Malformed input saturates; nothing faults
//!
//! Construction validates the configuration and builds the response tables;
//! do it at load time, not in the frame loop.
//!
//! # Example
//!
//! ```
//! use openaim_shaper::prelude::*;
//!
//! let shaper = RateShaper::new(ShaperConfig::default())?;
//!
//! // One simulation frame at 60 Hz: stick pushed right and slightly down.
//! let delta = shaper.shape_frame(0.75, -0.3, 1.0 / 60.0);
//! assert!(delta.yaw_deg > 0.0);
//! assert!(delta.pitch_deg < 0.0);
//!
//! let mut aim = AimAngles::default();
//! aim.apply(delta);
//! # Ok::<(), openaim_shaper::ShaperError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod aim;
pub mod config;
pub mod prelude;
pub mod shaper;

pub use aim::{AimAngles, AimDelta};
pub use config::ShaperConfig;
pub use shaper::RateShaper;

use openaim_curves::Axis;
use thiserror::Error;

/// Error type for shaper configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShaperError {
    /// A base rate must be finite and strictly positive.
    #[error("base rate for the {axis} axis must be finite and positive, got {rate}")]
    InvalidBaseRate {
        /// Axis the rate belongs to.
        axis: Axis,
        /// The rejected rate in degrees per second.
        rate: f64,
    },

    /// The deadzone must be a finite fraction in `[0, 1)`.
    #[error("deadzone must lie in [0, 1), got {0}")]
    InvalidDeadzone(f64),
}

/// Result alias for shaper construction.
pub type ShaperResult<T> = Result<T, ShaperError>;
