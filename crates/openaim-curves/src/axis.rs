//! Input axis selector.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One independently calibrated input dimension.
///
/// Horizontal stick deflection drives yaw ("turn"); vertical deflection
/// drives pitch ("look-up"). The two axes are calibrated separately and an
/// implementation must never assume their tables are symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Axis {
    /// Horizontal stick deflection, applied as incremental yaw.
    #[default]
    Turn,
    /// Vertical stick deflection, applied as incremental pitch.
    LookUp,
}

impl Axis {
    /// Both axes, in the order used for per-axis storage.
    pub const ALL: [Axis; 2] = [Axis::Turn, Axis::LookUp];

    /// Stable index for per-axis arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::Turn => 0,
            Axis::LookUp => 1,
        }
    }

    /// Human-readable axis name.
    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Turn => "turn",
            Axis::LookUp => "look-up",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
