//! Natural cubic spline interpolation.

use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Polynomial coefficients for one spline segment.
///
/// `y = a + b*(x-xi) + c*(x-xi)^2 + d*(x-xi)^3`
#[derive(Debug, Clone, Copy)]
struct Segment<T: Float> {
    a: T,
    b: T,
    c: T,
    d: T,
}

/// Natural cubic spline interpolator with C2 continuity.
///
/// Stores sorted (x, y) knots and the per-segment polynomial coefficients of
/// the natural spline (zero second derivative at both boundaries). Generic
/// over `T: Float`.
///
/// # Construction
///
/// Knots are sorted by x during construction; at least 4 points are required
/// (the grid engine falls back to linear blending below that).
///
/// # Example
///
/// ```
/// use vega_core::math::interpolators::{CubicSplineInterpolator, Interpolator};
///
/// let xs: [f64; 4] = [-0.075, -0.025, 0.025, 0.075];
/// let ys = [120.0, 95.0, 88.0, 90.0];
/// let spline = CubicSplineInterpolator::new(&xs, &ys).unwrap();
///
/// // Knots reproduce exactly
/// assert!((spline.interpolate(-0.025).unwrap() - 95.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSplineInterpolator<T: Float> {
    xs: Vec<T>,
    segments: Vec<Segment<T>>,
}

impl<T: Float> CubicSplineInterpolator<T> {
    /// Construct a natural cubic spline from x and y knots.
    ///
    /// # Errors
    ///
    /// - `InterpolationError::InvalidInput` on mismatched slice lengths
    /// - `InterpolationError::InsufficientData` below 4 points
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 4 {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: 4,
            });
        }

        let mut pairs: Vec<(T, T)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        let (sorted_xs, sorted_ys): (Vec<T>, Vec<T>) = pairs.into_iter().unzip();

        let segments = Self::solve_segments(&sorted_xs, &sorted_ys);
        Ok(Self {
            xs: sorted_xs,
            segments,
        })
    }

    /// Number of knots.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// True when the spline has no knots (never holds for a constructed one).
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Solve the natural-spline tridiagonal system (Thomas algorithm) for the
    /// second derivatives, then assemble per-segment coefficients.
    fn solve_segments(xs: &[T], ys: &[T]) -> Vec<Segment<T>> {
        let n = xs.len();
        let two = T::from(2.0).unwrap();
        let six = T::from(6.0).unwrap();

        let h: Vec<T> = (0..n - 1).map(|i| xs[i + 1] - xs[i]).collect();

        // Interior equations for second derivatives m[1..n-1]:
        //   h[i-1]*m[i-1] + 2*(h[i-1]+h[i])*m[i] + h[i]*m[i+1] = rhs[i]
        // with natural boundaries m[0] = m[n-1] = 0.
        let mut diag = vec![T::zero(); n];
        let mut rhs = vec![T::zero(); n];
        for i in 1..n - 1 {
            diag[i] = two * (h[i - 1] + h[i]);
            rhs[i] = six * ((ys[i + 1] - ys[i]) / h[i] - (ys[i] - ys[i - 1]) / h[i - 1]);
        }

        // Forward sweep
        let mut c_prime = vec![T::zero(); n];
        let mut d_prime = vec![T::zero(); n];
        for i in 1..n - 1 {
            let lower = if i > 1 { h[i - 1] } else { T::zero() };
            let denom = diag[i] - lower * c_prime[i - 1];
            c_prime[i] = h[i] / denom;
            d_prime[i] = (rhs[i] - lower * d_prime[i - 1]) / denom;
        }

        // Back substitution
        let mut m = vec![T::zero(); n];
        for i in (1..n - 1).rev() {
            m[i] = d_prime[i] - c_prime[i] * m[i + 1];
        }

        (0..n - 1)
            .map(|i| {
                let hi = h[i];
                Segment {
                    a: ys[i],
                    b: (ys[i + 1] - ys[i]) / hi - hi * (two * m[i] + m[i + 1]) / six,
                    c: m[i] / two,
                    d: (m[i + 1] - m[i]) / (six * hi),
                }
            })
            .collect()
    }

    /// Segment index for `x`, clamped to `[0, n-2]`.
    fn find_segment(&self, x: T) -> usize {
        let pos = self.xs.partition_point(|&xi| xi <= x);
        if pos == 0 {
            0
        } else if pos >= self.xs.len() {
            self.xs.len() - 2
        } else {
            pos - 1
        }
    }
}

impl<T: Float> Interpolator<T> for CubicSplineInterpolator<T> {
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        let (x_min, x_max) = self.domain();
        if x < x_min || x > x_max {
            return Err(InterpolationError::OutOfBounds {
                x: x.to_f64().unwrap_or(f64::NAN),
                min: x_min.to_f64().unwrap_or(f64::NAN),
                max: x_max.to_f64().unwrap_or(f64::NAN),
            });
        }

        let i = self.find_segment(x);
        let seg = self.segments[i];
        let dx = x - self.xs[i];
        Ok(seg.a + dx * (seg.b + dx * (seg.c + dx * seg.d)))
    }

    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}
