//! Vega grid containers.
//!
//! A `VegaGrid` is the immutable tabular representation of vega exposure by
//! expiry (columns) and moneyness (rows), captured at a single spot-shift
//! level. Cross-grid cell correspondence is purely positional: every grid in
//! a `SurfaceSet` must share the same expiry axis length and row ordering,
//! and the constructor enforces the per-grid half of that invariant.

use super::error::GridError;
use super::time::Date;

/// One moneyness row of a vega grid.
///
/// `values` is aligned positionally with the owning grid's expiry axis;
/// `total` is the row sum.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridRow {
    /// Strike/spot ratio (1.0 = at-the-money)
    pub moneyness: f64,
    /// Vega per expiry column, in premium currency per vol point
    pub values: Vec<f64>,
    /// Sum across the row
    pub total: f64,
}

impl GridRow {
    /// Build a row, deriving `total` as the sum of `values`.
    pub fn new(moneyness: f64, values: Vec<f64>) -> Self {
        let total = values.iter().sum();
        Self {
            moneyness,
            values,
            total,
        }
    }

    /// Build a row with an externally supplied total (e.g. carried over from
    /// a source system that reports its own row sums).
    pub fn with_total(moneyness: f64, values: Vec<f64>, total: f64) -> Self {
        Self {
            moneyness,
            values,
            total,
        }
    }
}

/// Column-wise totals across all rows plus the grand total.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TotalRow {
    /// Per-expiry column totals
    pub values: Vec<f64>,
    /// Sum over the whole grid
    pub grand_total: f64,
}

/// Immutable vega surface snapshot at one spot-shift level.
///
/// # Examples
///
/// ```
/// use vega_core::types::{Date, GridRow, VegaGrid};
///
/// let expiries = vec![
///     Date::from_ymd(2026, 3, 20).unwrap(),
///     Date::from_ymd(2026, 6, 19).unwrap(),
/// ];
/// let grid = VegaGrid::new(
///     -0.05,
///     expiries,
///     vec![
///         GridRow::new(0.95, vec![40_000.0, 55_000.0]),
///         GridRow::new(1.00, vec![90_000.0, 120_000.0]),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(grid.n_rows(), 2);
/// assert_eq!(grid.n_expiries(), 2);
/// assert!((grid.total_vega() - 305_000.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VegaGrid {
    /// Spot-move fraction this grid was computed at (e.g. -0.05 for -5%)
    pub spot_shift: f64,
    /// Ordered expiry axis, shared positionally by every row
    pub expiries: Vec<Date>,
    /// Ordered moneyness rows
    pub rows: Vec<GridRow>,
    /// Optional column-wise totals reported by the source system
    pub total_row: Option<TotalRow>,
}

impl VegaGrid {
    /// Build a grid, validating that every row carries exactly one value per
    /// expiry column.
    ///
    /// # Errors
    ///
    /// - `GridError::NoExpiries` if the expiry axis is empty
    /// - `GridError::ShapeMismatch` if any row's value count differs from
    ///   the expiry count
    pub fn new(
        spot_shift: f64,
        expiries: Vec<Date>,
        rows: Vec<GridRow>,
    ) -> Result<Self, GridError> {
        if expiries.is_empty() {
            return Err(GridError::NoExpiries);
        }
        for (i, row) in rows.iter().enumerate() {
            if row.values.len() != expiries.len() {
                return Err(GridError::ShapeMismatch {
                    row: i,
                    expected: expiries.len(),
                    got: row.values.len(),
                });
            }
        }
        Ok(Self {
            spot_shift,
            expiries,
            rows,
            total_row: None,
        })
    }

    /// Attach a source-reported total row.
    pub fn with_total_row(mut self, total_row: TotalRow) -> Self {
        self.total_row = Some(total_row);
        self
    }

    /// Derive the total row from the cells (column sums + grand total).
    pub fn with_computed_total_row(mut self) -> Self {
        let mut values = vec![0.0; self.expiries.len()];
        for row in &self.rows {
            for (j, v) in row.values.iter().enumerate() {
                values[j] += v;
            }
        }
        let grand_total = values.iter().sum();
        self.total_row = Some(TotalRow {
            values,
            grand_total,
        });
        self
    }

    /// Number of moneyness rows.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of expiry columns.
    pub fn n_expiries(&self) -> usize {
        self.expiries.len()
    }

    /// True when the grid carries no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The moneyness axis, in row order.
    pub fn moneyness_axis(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.moneyness).collect()
    }

    /// Vega at `(row, col)`, or `None` when out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.values.get(col)).copied()
    }

    /// Total vega across all cells (sum of row totals).
    pub fn total_vega(&self) -> f64 {
        self.rows.iter().map(|r| r.total).sum()
    }
}
