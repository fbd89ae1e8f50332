//! Scenario matrices: P&L ladders across spot moves.
//!
//! In beta mode the vol change follows from the model, so the ladder is one
//! P&L figure per spot move (with bucket breakdown). In manual mode the vol
//! change is an input, so the ladder becomes a 2-D spot x vol grid. Ladder
//! points are independent pure computations and fan out over rayon.

use crate::error::EngineError;
use crate::interp::interpolate;
use crate::pnl::{compute_pnl, BucketPnL};
use rayon::prelude::*;
use vega_core::types::{Date, SurfaceSet};
use vega_models::{ManualParams, VolParams};

/// One point of the beta-mode spot ladder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LadderPoint {
    /// Requested spot move (fraction)
    pub spot_move: f64,
    /// Total P&L at this move
    pub total_pnl: f64,
    /// P&L by maturity bucket, display order
    pub by_bucket: Vec<BucketPnL>,
}

/// One row of the manual-mode spot x vol ladder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolLadderPoint {
    /// Requested spot move (fraction)
    pub spot_move: f64,
    /// `(atm_vol_change, total_pnl)` per vol override, in override order
    pub by_vol_change: Vec<(f64, f64)>,
}

/// Default ladder: -7.5% to +7.5% in 0.5% steps.
pub fn default_spot_moves() -> Vec<f64> {
    (-15..=15).map(|i| i as f64 * 0.005).collect()
}

/// Default vol overrides for the manual ladder (vol points).
pub fn default_vol_overrides() -> Vec<f64> {
    vec![-5.0, -3.0, -1.0, 0.0, 1.0, 3.0, 5.0]
}

/// P&L across a ladder of spot moves.
///
/// Each ladder point interpolates a grid at its move and aggregates P&L
/// under `params`. A grid with no rows yields a zero point rather than an
/// error ("no data" propagates as zero impact on the ladder).
///
/// # Errors
///
/// [`EngineError::EmptyInput`] when no surfaces are loaded,
/// [`EngineError::ShapeMismatch`] when the surfaces are misaligned.
pub fn compute_spot_ladder(
    surfaces: &SurfaceSet,
    spot_moves: &[f64],
    params: &VolParams,
    reference: Date,
) -> Result<Vec<LadderPoint>, EngineError> {
    spot_moves
        .par_iter()
        .map(|&spot_move| {
            let grid = interpolate(surfaces, spot_move)?;
            let point = match compute_pnl(&grid, spot_move, params, reference) {
                Some(result) => LadderPoint {
                    spot_move,
                    total_pnl: result.total_pnl,
                    by_bucket: result.by_bucket,
                },
                None => LadderPoint {
                    spot_move,
                    total_pnl: 0.0,
                    by_bucket: Vec::new(),
                },
            };
            Ok(point)
        })
        .collect()
}

/// P&L across a 2-D spot x vol-override ladder in manual mode.
///
/// For every spot move, the manual parameters are re-run once per override
/// with `atm_vol_change` replaced by the override value; skew and term
/// settings are kept from `manual`.
pub fn compute_vol_ladder(
    surfaces: &SurfaceSet,
    spot_moves: &[f64],
    vol_overrides: &[f64],
    manual: &ManualParams,
    reference: Date,
) -> Result<Vec<VolLadderPoint>, EngineError> {
    spot_moves
        .par_iter()
        .map(|&spot_move| {
            let grid = interpolate(surfaces, spot_move)?;
            let by_vol_change = vol_overrides
                .iter()
                .map(|&dv| {
                    let params = VolParams::Manual(ManualParams {
                        atm_vol_change: dv,
                        ..*manual
                    });
                    let pnl = compute_pnl(&grid, spot_move, &params, reference)
                        .map(|r| r.total_pnl)
                        .unwrap_or(0.0);
                    (dv, pnl)
                })
                .collect();
            Ok(VolLadderPoint {
                spot_move,
                by_vol_change,
            })
        })
        .collect()
}
