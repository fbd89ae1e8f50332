//! Volatility scenario parameters.
//!
//! The two parameter records deliberately do not share a base shape: the
//! beta model is driven by a calibration constant while the manual model is
//! a direct shock specification. `VolParams` is the closed union the engine
//! dispatches over.

/// Parameters for the calibrated spot-vol beta model.
///
/// Defaults reflect the standing SPX calibration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BetaParams {
    /// ATM vol change (vol points) per 1% spot move
    pub spot_vol_beta: f64,
    /// Additional vol response for OTM strikes per unit moneyness deviation
    pub skew_beta: f64,
    /// Exponential decay rate of the vol response across the term structure
    pub term_decay: f64,
    /// Vol-of-vol effect amplifying large moves (quadratic in the move)
    pub convexity: f64,
    /// Scaling of the second-order (volga) P&L term
    pub volga_scale: f64,
    /// Floor on the term factor so long-dated vol response never vanishes
    pub term_floor: f64,
}

impl Default for BetaParams {
    fn default() -> Self {
        Self {
            spot_vol_beta: -0.40,
            skew_beta: 0.15,
            term_decay: 0.50,
            convexity: 2.0,
            volga_scale: 0.15,
            term_floor: 0.08,
        }
    }
}

/// Parameters for the manual vol scenario mode.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ManualParams {
    /// Parallel shift in vol points
    pub atm_vol_change: f64,
    /// Vol points per unit moneyness deviation from ATM
    pub skew_change: f64,
    /// Dampens the vol change for longer tenors (sqrt-time denominator)
    pub term_multiplier: f64,
    /// Scaling of the second-order (volga) P&L term
    pub volga_scale: f64,
}

impl Default for ManualParams {
    fn default() -> Self {
        Self {
            atm_vol_change: 0.0,
            skew_change: 0.1,
            term_multiplier: 0.5,
            volga_scale: 0.15,
        }
    }
}

/// Closed union of the two volatility scenario modes.
///
/// No subtyping: each variant carries its own parameter record and maps to
/// its own pure computation function.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "mode", rename_all = "snake_case"))]
pub enum VolParams {
    /// Calibrated spot-vol beta model
    Beta(BetaParams),
    /// Direct user-specified vol shock
    Manual(ManualParams),
}

impl Default for VolParams {
    fn default() -> Self {
        Self::Beta(BetaParams::default())
    }
}

impl VolParams {
    /// Mode tag ("beta" or "manual").
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Beta(_) => "beta",
            Self::Manual(_) => "manual",
        }
    }

    /// The volga scaling carried by either variant.
    pub fn volga_scale(&self) -> f64 {
        match self {
            Self::Beta(p) => p.volga_scale,
            Self::Manual(p) => p.volga_scale,
        }
    }
}
