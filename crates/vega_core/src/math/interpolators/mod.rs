//! 1-D interpolation over the spot-shift axis.
//!
//! The grid interpolation engine blends whole grids linearly between two
//! bracketing shift levels; the cubic method instead fits a per-cell natural
//! spline across every available level. The spline lives here, behind the
//! same small `Interpolator` seam the rest of the workspace programs against.

mod cubic_spline;

pub use cubic_spline::CubicSplineInterpolator;

use crate::types::InterpolationError;
use num_traits::Float;

/// Common interface for 1-D interpolators.
pub trait Interpolator<T: Float> {
    /// Interpolate the value at `x`.
    ///
    /// Returns `InterpolationError::OutOfBounds` when `x` lies outside
    /// [`domain`](Self::domain).
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// The valid interpolation domain `(x_min, x_max)`.
    fn domain(&self) -> (T, T);
}
