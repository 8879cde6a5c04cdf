//! Prelude for the curves crate.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//!
//! ```
//! use openaim_curves::prelude::*;
//!
//! let table = ResponseTable::for_axis(Axis::LookUp);
//! let shaped = table.evaluate(64.0);
//! assert!(shaped > 0.0 && shaped < 1.0);
//! ```

pub use crate::axis::Axis;
pub use crate::error::{CurveError, CurveResult};
pub use crate::table::{Knot, ResponseTable};
