//! Single-scenario P&L aggregation.
//!
//! Combines an (interpolated) vega grid with a vol-change model to produce
//! per-cell, per-expiry, per-moneyness, and total P&L in one pass, with the
//! second-order volga contribution reported separately.

use vega_core::types::{years_to_expiry, Date, ExpiryBucket, GridRow, VegaGrid};
use vega_models::{beta_vol_change, manual_vol_change, VolChange, VolParams};

/// P&L for one expiry column, tagged with its maturity bucket.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpiryPnL {
    /// Expiry date
    pub expiry: Date,
    /// Maturity bucket relative to the reference date
    pub bucket: ExpiryBucket,
    /// P&L summed over moneyness
    pub pnl: f64,
}

/// P&L aggregated into one maturity bucket.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BucketPnL {
    /// Maturity bucket
    pub bucket: ExpiryBucket,
    /// P&L summed over the bucket's expiries
    pub pnl: f64,
}

/// P&L for one moneyness row.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoneynessPnL {
    /// Strike/spot ratio
    pub moneyness: f64,
    /// P&L summed over expiries
    pub pnl: f64,
}

/// Complete P&L breakdown for one scenario.
///
/// Derived and recomputed on every parameter change; nothing here is ever
/// mutated in place.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PnLResult {
    /// Total P&L across all cells
    pub total_pnl: f64,
    /// Per-cell P&L, aligned with the input grid's rows
    pub rows: Vec<GridRow>,
    /// Applied first-order vol changes, aligned with the input grid's rows
    pub vol_changes: Vec<GridRow>,
    /// P&L by expiry column, tagged with maturity buckets
    pub by_expiry: Vec<ExpiryPnL>,
    /// P&L by maturity bucket, in display order (only buckets present)
    pub by_bucket: Vec<BucketPnL>,
    /// P&L by moneyness row
    pub by_moneyness: Vec<MoneynessPnL>,
    /// Isolated second-order contribution (sum of vega x volga per cell)
    pub volga_pnl: f64,
    /// The requested spot move
    pub spot_move: f64,
    /// The parameters the scenario was computed under
    pub params: VolParams,
}

/// Full P&L for a grid under a vol scenario.
///
/// Cell P&L is `vega·dσ + vega·volga`, with `(dσ, volga)` evaluated at the
/// cell's moneyness and expiry. Returns `None` when the grid carries no rows
/// ("no data" propagates rather than computing on empty input).
///
/// # Examples
///
/// ```
/// use vega_core::types::{Date, GridRow, VegaGrid};
/// use vega_models::VolParams;
/// use vega_risk::compute_pnl;
///
/// let reference = Date::from_ymd(2026, 2, 6).unwrap();
/// let grid = VegaGrid::new(
///     -0.05,
///     vec![Date::from_ymd(2027, 2, 6).unwrap()],
///     vec![GridRow::new(1.0, vec![100.0])],
/// )
/// .unwrap();
///
/// let result = compute_pnl(&grid, -0.05, &VolParams::default(), reference).unwrap();
/// assert_eq!(result.by_expiry.len(), 1);
/// ```
pub fn compute_pnl(
    grid: &VegaGrid,
    spot_move: f64,
    params: &VolParams,
    reference: Date,
) -> Option<PnLResult> {
    if grid.is_empty() {
        return None;
    }

    // Per-column time to expiry and bucket, shared by every row.
    let t_years: Vec<f64> = grid
        .expiries
        .iter()
        .map(|e| years_to_expiry(reference, *e))
        .collect();
    let buckets: Vec<ExpiryBucket> = grid
        .expiries
        .iter()
        .map(|e| ExpiryBucket::classify_date(*e, reference))
        .collect();

    let n_expiries = grid.n_expiries();
    let mut total_pnl = 0.0;
    let mut volga_total = 0.0;
    let mut by_expiry_pnl = vec![0.0; n_expiries];
    let mut rows = Vec::with_capacity(grid.n_rows());
    let mut vol_changes = Vec::with_capacity(grid.n_rows());
    let mut by_moneyness = Vec::with_capacity(grid.n_rows());

    for row in &grid.rows {
        let mut pnl_values = Vec::with_capacity(n_expiries);
        let mut change_values = Vec::with_capacity(n_expiries);
        let mut row_pnl = 0.0;

        for (j, vega) in row.values.iter().enumerate() {
            let change = cell_vol_change(row.moneyness, t_years[j], spot_move, params);
            let first_order = vega * change.d_sigma;
            let second_order = vega * change.volga_pnl;
            let cell_pnl = first_order + second_order;

            pnl_values.push(cell_pnl);
            change_values.push(change.d_sigma);
            row_pnl += cell_pnl;
            by_expiry_pnl[j] += cell_pnl;
            volga_total += second_order;
        }

        total_pnl += row_pnl;
        by_moneyness.push(MoneynessPnL {
            moneyness: row.moneyness,
            pnl: row_pnl,
        });
        rows.push(GridRow::with_total(row.moneyness, pnl_values, row_pnl));
        vol_changes.push(GridRow::new(row.moneyness, change_values));
    }

    let by_expiry: Vec<ExpiryPnL> = grid
        .expiries
        .iter()
        .zip(buckets.iter())
        .zip(by_expiry_pnl.iter())
        .map(|((expiry, bucket), pnl)| ExpiryPnL {
            expiry: *expiry,
            bucket: *bucket,
            pnl: *pnl,
        })
        .collect();

    let by_bucket = aggregate_buckets(&by_expiry);

    Some(PnLResult {
        total_pnl,
        rows,
        vol_changes,
        by_expiry,
        by_bucket,
        by_moneyness,
        volga_pnl: volga_total,
        spot_move,
        params: *params,
    })
}

/// Vol change for one cell given its pre-computed time to expiry.
fn cell_vol_change(moneyness: f64, t_years: f64, spot_move: f64, params: &VolParams) -> VolChange {
    if t_years <= 0.0 {
        return VolChange::zero();
    }
    match params {
        VolParams::Beta(p) => beta_vol_change(moneyness, t_years, spot_move, p),
        VolParams::Manual(p) => manual_vol_change(moneyness, t_years, p),
    }
}

/// Fold per-expiry P&L into maturity buckets, preserving display order.
fn aggregate_buckets(by_expiry: &[ExpiryPnL]) -> Vec<BucketPnL> {
    ExpiryBucket::all()
        .iter()
        .filter_map(|bucket| {
            let mut pnl = 0.0;
            let mut seen = false;
            for entry in by_expiry.iter().filter(|e| e.bucket == *bucket) {
                pnl += entry.pnl;
                seen = true;
            }
            seen.then_some(BucketPnL {
                bucket: *bucket,
                pnl,
            })
        })
        .collect()
}
