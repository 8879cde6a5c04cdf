//! Error types for response-table construction.

use thiserror::Error;

/// Error type for response-table validation.
///
/// Evaluation itself never fails (out-of-domain input is clamped); these
/// errors only arise when building a custom table from untrusted knot data,
/// for example a deserialized calibration profile.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// A table must contain at least one knot.
    #[error("response table must contain at least one knot")]
    Empty,

    /// A knot coordinate was NaN or infinite.
    #[error("knot {index} has a non-finite coordinate")]
    NonFinite {
        /// Index of the offending knot.
        index: usize,
    },

    /// A knot input lies outside the raw-input domain.
    #[error("knot {index} input {input} is outside the domain (0, 100]")]
    InputOutOfDomain {
        /// Index of the offending knot.
        index: usize,
        /// The invalid input coordinate.
        input: f64,
    },

    /// A knot output lies outside the shaped range.
    #[error("knot {index} output {output} is outside the range [0, 1]")]
    OutputOutOfRange {
        /// Index of the offending knot.
        index: usize,
        /// The invalid output coordinate.
        output: f64,
    },

    /// Knot inputs must increase strictly.
    #[error("knot {index} input {input} does not increase over the previous knot")]
    NonIncreasingInput {
        /// Index of the offending knot.
        index: usize,
        /// The non-increasing input coordinate.
        input: f64,
    },

    /// Knot outputs must never decrease.
    #[error("knot {index} output {output} decreases below the previous knot")]
    DecreasingOutput {
        /// Index of the offending knot.
        index: usize,
        /// The decreasing output coordinate.
        output: f64,
    },
}

/// Result alias for table construction.
pub type CurveResult<T> = Result<T, CurveError>;
