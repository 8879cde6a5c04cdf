//! Consumer-side aim state.
//!
//! The shaper produces per-frame rotation increments; the consumer applies
//! them to an accumulated camera orientation. This module provides the
//! minimal boundary types for that handoff.

use serde::{Deserialize, Serialize};

/// Rotation increments for one frame, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AimDelta {
    /// Incremental yaw for this frame.
    pub yaw_deg: f64,
    /// Incremental pitch for this frame.
    pub pitch_deg: f64,
}

impl AimDelta {
    /// A delta that leaves the orientation unchanged.
    pub const ZERO: AimDelta = AimDelta {
        yaw_deg: 0.0,
        pitch_deg: 0.0,
    };
}

/// Accumulated first-person camera orientation, in degrees.
///
/// Yaw wraps into `[0, 360)`; pitch is clamped to the straight-up /
/// straight-down limits the way a first-person camera controller does.
///
/// # Example
///
/// ```
/// use openaim_shaper::{AimAngles, AimDelta};
///
/// let mut aim = AimAngles::default();
/// aim.apply(AimDelta { yaw_deg: -10.0, pitch_deg: 5.0 });
/// assert!((aim.yaw_deg - 350.0).abs() < 1e-9);
/// assert!((aim.pitch_deg - 5.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AimAngles {
    /// Accumulated yaw in `[0, 360)`.
    pub yaw_deg: f64,
    /// Accumulated pitch in `[-90, 90]`.
    pub pitch_deg: f64,
}

impl AimAngles {
    /// Pitch limit: straight up / straight down.
    pub const PITCH_LIMIT_DEG: f64 = 90.0;

    /// Applies one frame's rotation increments.
    pub fn apply(&mut self, delta: AimDelta) {
        let mut yaw = (self.yaw_deg + delta.yaw_deg).rem_euclid(360.0);
        // rem_euclid rounds up to the modulus itself for tiny negative
        // inputs; keep the invariant yaw < 360.
        if yaw >= 360.0 {
            yaw = 0.0;
        }
        self.yaw_deg = yaw;
        self.pitch_deg = (self.pitch_deg + delta.pitch_deg)
            .clamp(-Self::PITCH_LIMIT_DEG, Self::PITCH_LIMIT_DEG);
    }
}
