//! Grid interpolation across spot-shift levels.
//!
//! Produces a synthetic vega grid at an arbitrary spot move by blending the
//! two pre-computed grids bracketing that move. This is per-cell
//! interpolation across the 1-D shift axis only: the moneyness and expiry
//! axes are fixed and shared, and cross-grid cell correspondence is purely
//! positional.
//!
//! Requested moves outside the available shift range are silently clamped to
//! the boundary; callers that need to warn the user compare the requested
//! move against [`SurfaceSet::clamp`].

use crate::error::EngineError;
use vega_core::math::interpolators::{CubicSplineInterpolator, Interpolator};
use vega_core::types::{GridRow, SurfaceSet, TotalRow, VegaGrid, SHIFT_KEY_TOLERANCE};

/// Interpolation method across the shift axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InterpMethod {
    /// Piecewise-linear blend between the two bracketing grids
    #[default]
    Linear,
    /// Per-cell natural cubic spline across all shift levels; falls back to
    /// linear below four levels
    Cubic,
}

impl InterpMethod {
    /// Method tag ("linear" or "cubic").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Cubic => "cubic",
        }
    }
}

/// Interpolate a vega grid at `spot_move` with the linear method.
///
/// See [`interpolate_with`] for the full contract.
pub fn interpolate(surfaces: &SurfaceSet, spot_move: f64) -> Result<VegaGrid, EngineError> {
    interpolate_with(surfaces, spot_move, InterpMethod::Linear)
}

/// Interpolate a vega grid at `spot_move`.
///
/// # Contract
///
/// - Empty set → [`EngineError::EmptyInput`].
/// - A single surface is returned as a deep copy regardless of `spot_move`
///   (no extrapolation is attempted).
/// - `spot_move` is clamped into the available shift range.
/// - A move matching a stored level within `1e-10` returns that grid
///   directly, with `spot_shift` set to the requested move.
/// - Otherwise the bracketing pair is blended with a single shared fraction
///   `t = (clamped − s0)/(s1 − s0)` applied identically to every cell, every
///   row total, and (when both grids carry one) the total row.
/// - The output reuses the lower grid's expiry axis and records the
///   *requested* move as its `spot_shift`, so callers can detect clamping.
///
/// # Errors
///
/// - [`EngineError::EmptyInput`] when no surfaces are loaded
/// - [`EngineError::ShapeMismatch`] when grids being blended differ in row
///   count, expiry count, or moneyness axis
pub fn interpolate_with(
    surfaces: &SurfaceSet,
    spot_move: f64,
    method: InterpMethod,
) -> Result<VegaGrid, EngineError> {
    let clamped = surfaces.clamp(spot_move).ok_or(EngineError::EmptyInput)?;

    if surfaces.len() == 1 {
        return Ok(surfaces.grids()[0].clone());
    }

    if let Some(exact) = surfaces.get(clamped) {
        let mut grid = exact.clone();
        grid.spot_shift = spot_move;
        return Ok(grid);
    }

    match method {
        InterpMethod::Cubic if surfaces.len() >= 4 => cubic_blend(surfaces, spot_move, clamped),
        _ => linear_blend(surfaces, spot_move, clamped),
    }
}

/// Verify positional alignment of two grids about to be blended.
fn check_alignment(lower: &VegaGrid, upper: &VegaGrid) -> Result<(), EngineError> {
    let mismatch = |reason: String| EngineError::ShapeMismatch {
        lower: lower.spot_shift,
        upper: upper.spot_shift,
        reason,
    };

    if lower.n_rows() != upper.n_rows() {
        return Err(mismatch(format!(
            "row counts {} vs {}",
            lower.n_rows(),
            upper.n_rows()
        )));
    }
    if lower.n_expiries() != upper.n_expiries() {
        return Err(mismatch(format!(
            "expiry counts {} vs {}",
            lower.n_expiries(),
            upper.n_expiries()
        )));
    }
    for (i, (a, b)) in lower.rows.iter().zip(upper.rows.iter()).enumerate() {
        if (a.moneyness - b.moneyness).abs() > SHIFT_KEY_TOLERANCE {
            return Err(mismatch(format!(
                "moneyness axis differs at row {i}: {} vs {}",
                a.moneyness, b.moneyness
            )));
        }
    }
    Ok(())
}

fn linear_blend(
    surfaces: &SurfaceSet,
    spot_move: f64,
    clamped: f64,
) -> Result<VegaGrid, EngineError> {
    // clamp() guarantees clamped lies inside the range and the exact-match
    // branch has been taken for knots, so a bracketing pair must exist.
    let (lower, upper) = surfaces.bracketing(clamped).ok_or(EngineError::EmptyInput)?;
    check_alignment(lower, upper)?;

    let t = (clamped - lower.spot_shift) / (upper.spot_shift - lower.spot_shift);
    let lerp = |a: f64, b: f64| a + t * (b - a);

    let rows = lower
        .rows
        .iter()
        .zip(upper.rows.iter())
        .map(|(lo, hi)| {
            let values = lo
                .values
                .iter()
                .zip(hi.values.iter())
                .map(|(a, b)| lerp(*a, *b))
                .collect();
            GridRow::with_total(lo.moneyness, values, lerp(lo.total, hi.total))
        })
        .collect();

    let total_row = match (&lower.total_row, &upper.total_row) {
        (Some(lo), Some(hi)) if lo.values.len() == hi.values.len() => Some(TotalRow {
            values: lo
                .values
                .iter()
                .zip(hi.values.iter())
                .map(|(a, b)| lerp(*a, *b))
                .collect(),
            grand_total: lerp(lo.grand_total, hi.grand_total),
        }),
        _ => None,
    };

    Ok(VegaGrid {
        spot_shift: spot_move,
        expiries: lower.expiries.clone(),
        rows,
        total_row,
    })
}

fn cubic_blend(
    surfaces: &SurfaceSet,
    spot_move: f64,
    clamped: f64,
) -> Result<VegaGrid, EngineError> {
    let grids = surfaces.grids();
    let reference = &grids[0];
    for other in &grids[1..] {
        check_alignment(reference, other)?;
    }

    let shifts = surfaces.shifts();
    let mut rows = Vec::with_capacity(reference.n_rows());
    for i in 0..reference.n_rows() {
        let mut values = Vec::with_capacity(reference.n_expiries());
        for j in 0..reference.n_expiries() {
            let ys: Vec<f64> = grids.iter().map(|g| g.rows[i].values[j]).collect();
            let spline = CubicSplineInterpolator::new(&shifts, &ys)?;
            values.push(spline.interpolate(clamped)?);
        }
        rows.push(GridRow::new(reference.rows[i].moneyness, values));
    }

    let grid = VegaGrid {
        spot_shift: spot_move,
        expiries: reference.expiries.clone(),
        rows,
        total_row: None,
    };
    // Column totals are recomputed from the splined cells when every source
    // grid reported a total row.
    if grids.iter().all(|g| g.total_row.is_some()) {
        Ok(grid.with_computed_total_row())
    } else {
        Ok(grid)
    }
}
