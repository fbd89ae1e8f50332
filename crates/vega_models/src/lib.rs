//! # vega_models: Volatility Change Models
//!
//! Model layer of the vegabook workspace. Given a cell's moneyness and
//! expiry plus a scenario's spot move, these models produce the expected
//! implied-vol change (first order) and a second-order volga correction.
//!
//! Two mutually exclusive modes are provided as a closed tagged union
//! (`VolParams`), dispatched by `compute_vol_change`:
//!
//! - **Beta mode**: a parametric model driven by a calibrated spot-vol beta,
//!   with quadratic convexity, directional skew, and exponential term decay.
//! - **Manual mode**: a direct user-specified vol shock with a square-root
//!   term dampener.
//!
//! A separate VIX-implied shift model (`vix`) maps a daily VIX change onto
//! per-cell surface vol shifts for the stress replay engine.
//!
//! ## Example
//!
//! ```
//! use vega_core::types::Date;
//! use vega_models::{compute_vol_change, BetaParams, VolParams};
//!
//! let reference = Date::from_ymd(2026, 2, 6).unwrap();
//! let expiry = Date::from_ymd(2027, 2, 6).unwrap();
//! let params = VolParams::Beta(BetaParams::default());
//!
//! let change = compute_vol_change(1.0, expiry, -0.05, &params, reference);
//! assert!(change.d_sigma > 0.0); // vol rises on a -5% spot move
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod params;
pub mod vix;
pub mod vol_change;

pub use params::{BetaParams, ManualParams, VolParams};
pub use vix::vix_to_surface_shift;
pub use vol_change::{
    beta_vol_change, compute_vol_change, manual_vol_change, volga_factor, VolChange,
};
