//! Prelude for the shaper crate.
//!
//! This module re-exports the most commonly used types, including the axis
//! and table types from `openaim-curves`.
//!
//! # Example
//!
//! ```
//! use openaim_shaper::prelude::*;
//!
//! let shaper = RateShaper::new(ShaperConfig::default())?;
//! let delta = shaper.shape(Axis::Turn, 0.5, 1.0 / 60.0);
//! assert!(delta > 0.0);
//! # Ok::<(), openaim_shaper::ShaperError>(())
//! ```

pub use crate::aim::{AimAngles, AimDelta};
pub use crate::config::ShaperConfig;
pub use crate::shaper::RateShaper;
pub use crate::{ShaperError, ShaperResult};
pub use openaim_curves::{Axis, Knot, ResponseTable};
