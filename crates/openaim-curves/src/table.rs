//! Piecewise-linear response tables.

use serde::{Deserialize, Serialize};

use crate::axis::Axis;
use crate::calibration::{KNOT_COUNT, KNOT_INPUTS, LOOK_UP_OUTPUTS, TURN_OUTPUTS};
use crate::error::{CurveError, CurveResult};

/// A single calibrated (input, output) knot of a response curve.
///
/// # Example
///
/// ```
/// use openaim_curves::Knot;
///
/// let knot = Knot::new(50.0, 0.25);
/// assert!((knot.input - 50.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Knot {
    /// Raw input magnitude in `(0, 100]`.
    pub input: f64,
    /// Shaped output in `[0, 1]`.
    pub output: f64,
}

impl Knot {
    /// Creates a knot from a raw input magnitude and its shaped output.
    pub const fn new(input: f64, output: f64) -> Self {
        Self { input, output }
    }
}

/// Piecewise-linear response curve over the raw-input domain `[0, 100]`.
///
/// The curve is anchored through the origin: inputs below the first knot
/// interpolate from `(0, 0)`. Inputs above the last knot interpolate toward
/// `(100, 1)` so that maximum deflection always produces full-scale output,
/// even though the calibration data stops short of the domain end.
///
/// Evaluation is hot-path safe: no heap allocation, no I/O, bounded time
/// (binary search over the knots). Tables are built once at load time and
/// only read afterwards.
///
/// # Example
///
/// ```
/// use openaim_curves::{Axis, ResponseTable};
///
/// let table = ResponseTable::for_axis(Axis::Turn);
///
/// assert_eq!(table.evaluate(0.0), 0.0);
/// assert_eq!(table.evaluate(100.0), 1.0);
///
/// let shaped = table.evaluate(50.0);
/// assert!(shaped > 0.0 && shaped < 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResponseTable {
    knots: Box<[Knot]>,
}

impl ResponseTable {
    /// Upper end of the raw-input domain.
    pub const DOMAIN_MAX: f64 = 100.0;

    /// The shipped calibration for the horizontal (turn) axis.
    pub fn turn() -> Self {
        Self::from_calibration(&TURN_OUTPUTS)
    }

    /// The shipped calibration for the vertical (look-up) axis.
    pub fn look_up() -> Self {
        Self::from_calibration(&LOOK_UP_OUTPUTS)
    }

    /// The shipped calibration for the given axis.
    pub fn for_axis(axis: Axis) -> Self {
        match axis {
            Axis::Turn => Self::turn(),
            Axis::LookUp => Self::look_up(),
        }
    }

    fn from_calibration(outputs: &[f64; KNOT_COUNT]) -> Self {
        let knots = KNOT_INPUTS
            .iter()
            .zip(outputs.iter())
            .map(|(&input, &output)| Knot::new(input, output))
            .collect();
        Self { knots }
    }

    /// Builds a table from custom knot data, validating it first.
    ///
    /// Knot inputs must be finite, strictly increasing, and lie in
    /// `(0, 100]`; outputs must be finite, non-decreasing, and lie in
    /// `[0, 1]`. The origin anchor and the full-scale segment are implicit
    /// and must not be listed as knots.
    ///
    /// # Errors
    ///
    /// Returns a [`CurveError`] describing the first violation found.
    ///
    /// # Example
    ///
    /// ```
    /// use openaim_curves::{Knot, ResponseTable};
    ///
    /// let table = ResponseTable::from_knots(vec![
    ///     Knot::new(25.0, 0.1),
    ///     Knot::new(50.0, 0.3),
    ///     Knot::new(75.0, 0.6),
    /// ])?;
    /// assert_eq!(table.evaluate(50.0), 0.3);
    /// # Ok::<(), openaim_curves::CurveError>(())
    /// ```
    pub fn from_knots(knots: Vec<Knot>) -> CurveResult<Self> {
        if knots.is_empty() {
            return Err(CurveError::Empty);
        }

        let mut previous: Option<Knot> = None;
        for (index, knot) in knots.iter().enumerate() {
            if !knot.input.is_finite() || !knot.output.is_finite() {
                return Err(CurveError::NonFinite { index });
            }
            if knot.input <= 0.0 || knot.input > Self::DOMAIN_MAX {
                return Err(CurveError::InputOutOfDomain {
                    index,
                    input: knot.input,
                });
            }
            if knot.output < 0.0 || knot.output > 1.0 {
                return Err(CurveError::OutputOutOfRange {
                    index,
                    output: knot.output,
                });
            }
            if let Some(prev) = previous {
                if knot.input <= prev.input {
                    return Err(CurveError::NonIncreasingInput {
                        index,
                        input: knot.input,
                    });
                }
                if knot.output < prev.output {
                    return Err(CurveError::DecreasingOutput {
                        index,
                        output: knot.output,
                    });
                }
            }
            previous = Some(*knot);
        }

        Ok(Self {
            knots: knots.into_boxed_slice(),
        })
    }

    /// The calibrated knots, in increasing input order.
    pub fn knots(&self) -> &[Knot] {
        &self.knots
    }

    /// Maps a raw input magnitude to its shaped output.
    ///
    /// Input outside `[0, 100]` is clamped before evaluation; the host frame
    /// loop must never stall on a malformed sample, so saturation stands in
    /// for any error path. Output is always in `[0, 1]`, monotone
    /// non-decreasing in the input, and reproduces every knot exactly.
    #[inline]
    pub fn evaluate(&self, magnitude: f64) -> f64 {
        let x = magnitude.clamp(0.0, Self::DOMAIN_MAX);
        let idx = self.knots.partition_point(|k| k.input < x);

        let (lower, upper) = if idx == 0 {
            (Knot::new(0.0, 0.0), self.knots[0])
        } else if idx == self.knots.len() {
            (self.knots[idx - 1], Knot::new(Self::DOMAIN_MAX, 1.0))
        } else {
            (self.knots[idx - 1], self.knots[idx])
        };

        let span = upper.input - lower.input;
        if span <= 0.0 {
            return upper.output;
        }
        let t = (x - lower.input) / span;
        lower.output + t * (upper.output - lower.output)
    }
}

impl Default for ResponseTable {
    fn default() -> Self {
        Self::turn()
    }
}

impl<'de> Deserialize<'de> for ResponseTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let knots: Vec<Knot> = Vec::deserialize(deserializer)?;
        Self::from_knots(knots).map_err(serde::de::Error::custom)
    }
}
