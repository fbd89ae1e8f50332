//! # vega_core: Data Model and Numerical Foundation
//!
//! Foundation layer of the vegabook workspace, providing:
//! - Vega grid containers: `VegaGrid`, `GridRow`, `TotalRow` (`types::grid`)
//! - Shift-level keyed surface collections: `SurfaceSet` (`types::surface_set`)
//! - Time types: `Date`, ACT/365.25 year fractions (`types::time`)
//! - Expiry tenor buckets: `ExpiryBucket` (`types::bucket`)
//! - Error types: `GridError`, `DateError`, `InterpolationError` (`types::error`)
//! - Generic 1-D interpolators over the shift axis (`math::interpolators`)
//!
//! This crate has no dependencies on other vega_* crates and carries only
//! minimal external dependencies (chrono for date arithmetic, thiserror for
//! structured errors, num-traits for generic numerics, optional serde).
//!
//! ## Usage
//!
//! ```rust
//! use vega_core::types::{Date, GridRow, VegaGrid, years_to_expiry};
//!
//! let reference = Date::from_ymd(2026, 2, 6).unwrap();
//! let expiry = Date::from_ymd(2026, 8, 6).unwrap();
//! let t = years_to_expiry(reference, expiry);
//! assert!(t > 0.0);
//!
//! let grid = VegaGrid::new(
//!     0.0,
//!     vec![expiry],
//!     vec![GridRow::new(1.0, vec![125_000.0])],
//! )
//! .unwrap();
//! assert_eq!(grid.n_rows(), 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
