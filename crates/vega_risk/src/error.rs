//! Engine error types.

use thiserror::Error;
use vega_core::types::InterpolationError;

/// Errors from the scenario P&L engine.
///
/// The engine is deliberately permissive about numeric content (NaN and
/// infinities propagate), but fails fast on structural problems: an empty
/// surface set and positionally misaligned grids are the only error cases.
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineError {
    /// No surfaces are loaded.
    #[error("no surfaces loaded")]
    EmptyInput,

    /// Two grids being interpolated are not positionally aligned.
    #[error("grids at shifts {lower} and {upper} are not aligned: {reason}")]
    ShapeMismatch {
        /// Shift level of the lower grid
        lower: f64,
        /// Shift level of the upper grid
        upper: f64,
        /// What differed (row count, expiry count, moneyness axis)
        reason: String,
    },

    /// A 1-D interpolator rejected its inputs.
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}
