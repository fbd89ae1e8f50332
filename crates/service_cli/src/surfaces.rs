//! JSON surface loading.
//!
//! The upload/CSV side of the book lives outside this tool; what arrives
//! here is a JSON export with the grid invariants already promised by the
//! producer. Grids are still rebuilt through `VegaGrid::new` so malformed
//! shapes fail fast instead of corrupting positional alignment downstream.
//!
//! Expected schema:
//!
//! ```json
//! [
//!   {
//!     "spot_shift": -0.05,
//!     "expiries": ["2026-03-20", "2026-06-19"],
//!     "rows": [
//!       { "moneyness": 0.95, "values": [40000.0, 55000.0] },
//!       { "moneyness": 1.0, "values": [90000.0, 120000.0], "total": 210000.0 }
//!     ],
//!     "total_row": { "values": [130000.0, 175000.0], "grand_total": 305000.0 }
//!   }
//! ]
//! ```

use crate::error::Result;
use serde::Deserialize;
use vega_core::types::{Date, GridRow, SurfaceSet, TotalRow, VegaGrid};

#[derive(Debug, Deserialize)]
struct RawRow {
    moneyness: f64,
    values: Vec<f64>,
    /// Source-reported row total; derived from the values when absent
    total: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawTotalRow {
    values: Vec<f64>,
    grand_total: f64,
}

#[derive(Debug, Deserialize)]
struct RawGrid {
    spot_shift: f64,
    expiries: Vec<Date>,
    rows: Vec<RawRow>,
    #[serde(default)]
    total_row: Option<RawTotalRow>,
}

/// Load a surface set from a JSON file.
pub fn load_surfaces(path: &str) -> Result<SurfaceSet> {
    let raw = std::fs::read_to_string(path)?;
    parse_surfaces(&raw)
}

fn parse_surfaces(raw: &str) -> Result<SurfaceSet> {
    let grids: Vec<RawGrid> = serde_json::from_str(raw)?;
    let mut set = SurfaceSet::new();
    for raw_grid in grids {
        let rows = raw_grid
            .rows
            .into_iter()
            .map(|r| match r.total {
                Some(total) => GridRow::with_total(r.moneyness, r.values, total),
                None => GridRow::new(r.moneyness, r.values),
            })
            .collect();
        let mut grid = VegaGrid::new(raw_grid.spot_shift, raw_grid.expiries, rows)?;
        if let Some(t) = raw_grid.total_row {
            grid = grid.with_total_row(TotalRow {
                values: t.values,
                grand_total: t.grand_total,
            });
        }
        set.insert(grid);
    }
    Ok(set)
}
