//! Calibrated Stick Response Curves for OpenAim
//!
//! This crate implements the response-curve remapping used to convert raw
//! analog turn/look-rate input into a non-linear output rate. Each axis has
//! its own externally calibrated table of (input, output) knots; evaluation
//! is piecewise-linear interpolation over that table.
//!
//! # Overview
//!
//! - [`ResponseTable`] - piecewise-linear curve over the raw-input domain
//!   `[0, 100]`, origin-anchored and clamped to unity at full deflection
//! - [`Axis`] - selector for the two independently calibrated axes
//! - [`Knot`] - a single calibrated (input, output) pair
//! - [`CurveError`] - validation errors for custom tables
//!
//! # Hot-Path Safety
//!
//! `ResponseTable::evaluate()` runs once per axis per simulation frame:
//! - No heap allocations
//! - No syscalls or I/O
//! - Bounded execution time
//! - Out-of-domain input is clamped, never an error
//!
//! Table construction (`from_knots`, deserialization) allocates and
//! validates; do it at load time, not in the frame loop.
//!
//! # Example
//!
//! ```
//! use openaim_curves::{Axis, ResponseTable};
//!
//! // Build the shipped calibration at load time
//! let table = ResponseTable::for_axis(Axis::Turn);
//!
//! // Per-frame evaluation
//! let shaped = table.evaluate(50.0);
//! assert!(shaped > 0.0 && shaped < 1.0);
//!
//! // The curve endpoints are exact
//! assert_eq!(table.evaluate(0.0), 0.0);
//! assert_eq!(table.evaluate(100.0), 1.0);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod axis;
mod calibration;
pub mod error;
pub mod prelude;
pub mod table;

pub use axis::Axis;
pub use error::{CurveError, CurveResult};
pub use table::{Knot, ResponseTable};
