//! Core data types for the vega P&L engine.

pub mod bucket;
pub mod error;
pub mod grid;
pub mod surface_set;
pub mod time;

pub use bucket::ExpiryBucket;
pub use error::{DateError, GridError, InterpolationError};
pub use grid::{GridRow, TotalRow, VegaGrid};
pub use surface_set::{SurfaceSet, SHIFT_KEY_TOLERANCE};
pub use time::{days_to_expiry, years_to_expiry, Date, DAYS_PER_YEAR};
