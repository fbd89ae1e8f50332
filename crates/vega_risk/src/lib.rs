//! # vega_risk: Scenario P&L and Stress Replay
//!
//! Application layer of the vegabook workspace.
//!
//! This crate provides:
//! - Grid interpolation across spot-shift levels (`interp`)
//! - Single-scenario P&L aggregation with expiry/moneyness breakdowns (`pnl`)
//! - Spot-ladder and spot-by-vol scenario matrices (`matrix`)
//! - Day-stepped historical stress replay (`replay`)
//! - Hand-curated historical crisis paths (`presets`)
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                 vega_risk                     │
//! ├───────────────────────────────────────────────┤
//! │  interp   - blend grids between shift levels  │
//! │  pnl      - vega x dVol aggregation           │
//! │  matrix   - P&L ladders across spot moves     │
//! │  replay   - fold a historical path day by day │
//! │  presets  - COVID 2020, Volmageddon 2018, ... │
//! └───────────────────────────────────────────────┘
//!          ↓                         ↓
//! ┌─────────────────┐      ┌────────────────────┐
//! │   vega_models   │      │     vega_core      │
//! │  vol-change     │      │  grids, surfaces,  │
//! │  models, VIX    │      │  dates, buckets    │
//! └─────────────────┘      └────────────────────┘
//! ```
//!
//! Every entry point is a pure synchronous function over immutable inputs;
//! ladder points and scenario comparisons fan out over rayon.
//!
//! ## Example
//!
//! ```
//! use vega_core::types::{Date, GridRow, SurfaceSet, VegaGrid};
//! use vega_models::VolParams;
//! use vega_risk::{compute_pnl, interpolate};
//!
//! let reference = Date::from_ymd(2026, 2, 6).unwrap();
//! let expiry = vec![Date::from_ymd(2027, 2, 6).unwrap()];
//! let surfaces = SurfaceSet::from_grids([
//!     VegaGrid::new(-0.05, expiry.clone(), vec![GridRow::new(1.0, vec![100.0])]).unwrap(),
//!     VegaGrid::new(0.05, expiry, vec![GridRow::new(1.0, vec![200.0])]).unwrap(),
//! ]);
//!
//! let grid = interpolate(&surfaces, 0.0).unwrap();
//! assert_eq!(grid.rows[0].values[0], 150.0);
//!
//! let result = compute_pnl(&grid, -0.05, &VolParams::default(), reference).unwrap();
//! assert!(result.total_pnl > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod interp;
pub mod matrix;
pub mod pnl;
pub mod presets;
pub mod replay;

pub use error::EngineError;
pub use interp::{interpolate, interpolate_with, InterpMethod};
pub use matrix::{
    compute_spot_ladder, compute_vol_ladder, default_spot_moves, default_vol_overrides,
    LadderPoint, VolLadderPoint,
};
pub use pnl::{compute_pnl, BucketPnL, ExpiryPnL, MoneynessPnL, PnLResult};
pub use presets::HistoricalScenario;
pub use replay::{
    run_all_scenarios, run_stress_scenario, DailyResult, ScenarioDay, ScenarioPath, ScenarioRun,
    MATERIAL_VEGA_THRESHOLD,
};
