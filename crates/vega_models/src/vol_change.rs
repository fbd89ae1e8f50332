//! First- and second-order vol change computation.
//!
//! ## Mathematical form
//!
//! **Beta mode** (spot move `dS` in percentage points):
//!
//! - ATM change: `beta·dS + convexity·dS²·0.01`
//! - Skew multiplier: `clamp(1 − skew_beta·(m−1)·sign(−dS), 0.5, 2.0)`
//! - Term factor: `max(term_floor, exp(−term_decay·T))`
//!
//! **Manual mode**:
//!
//! - `dσ = (atm_vol_change + skew_change·(m−1)) / (1 + term_multiplier·√T)`
//!
//! **Shared volga correction** (both modes):
//!
//! - `volga_factor = min(ln(max(m, 0.01))² / (0.20²·max(T, 0.01)), 10.0)`
//! - `volga_pnl = ½·volga_factor·dσ²·volga_scale`

use crate::params::{BetaParams, ManualParams, VolParams};
use vega_core::types::{years_to_expiry, Date};

/// Approximate ATM vol level anchoring the volga curvature estimate.
const ATM_SIGMA: f64 = 0.20;
/// Cap on the volga factor, preventing blow-up at near-zero maturity.
const VOLGA_FACTOR_CAP: f64 = 10.0;
/// Floors protecting the volga estimate's logs and divisions.
const MIN_MONEYNESS: f64 = 0.01;
const MIN_VOLGA_YEARS: f64 = 0.01;
/// Clamp bounds on the beta-mode skew multiplier.
const SKEW_MULT_MIN: f64 = 0.5;
const SKEW_MULT_MAX: f64 = 2.0;

/// Vol change at a single (moneyness, expiry) node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolChange {
    /// First-order implied-vol change (vol points)
    pub d_sigma: f64,
    /// Second-order P&L per unit vega
    pub volga_pnl: f64,
}

impl VolChange {
    /// The zero change (expired instruments).
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Sign with `sign(0) = 0`, matching the convention the skew term was
/// calibrated under (`f64::signum` maps 0 to 1, which would tilt flat moves).
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Curvature proxy for vol sensitivity: grows for deep wings and short
/// maturities, capped at 10.
pub fn volga_factor(moneyness: f64, t_years: f64) -> f64 {
    let log_m = moneyness.max(MIN_MONEYNESS).ln();
    let raw = (log_m * log_m) / (ATM_SIGMA * ATM_SIGMA * t_years.max(MIN_VOLGA_YEARS));
    raw.min(VOLGA_FACTOR_CAP)
}

fn volga_pnl(moneyness: f64, t_years: f64, d_sigma: f64, volga_scale: f64) -> f64 {
    0.5 * volga_factor(moneyness, t_years) * d_sigma * d_sigma * volga_scale
}

/// Vol change at one node under the calibrated spot-vol beta model.
///
/// `t_years` must be positive; [`compute_vol_change`] handles the expired
/// case before dispatching here.
pub fn beta_vol_change(
    moneyness: f64,
    t_years: f64,
    spot_move: f64,
    params: &BetaParams,
) -> VolChange {
    let ds = spot_move * 100.0;

    // Linear spot-vol sensitivity plus convexity, which always amplifies
    // large moves regardless of direction.
    let atm_change = params.spot_vol_beta * ds + params.convexity * ds * ds * 0.01;

    // OTM strikes react more (or less) depending on the direction of the
    // move relative to their moneyness; the sign flip is the skew asymmetry.
    let m_diff = moneyness - 1.0;
    let skew_mult =
        (1.0 - params.skew_beta * m_diff * sign(-ds)).clamp(SKEW_MULT_MIN, SKEW_MULT_MAX);

    let term_factor = params.term_floor.max((-params.term_decay * t_years).exp());

    let d_sigma = atm_change * skew_mult * term_factor;
    VolChange {
        d_sigma,
        volga_pnl: volga_pnl(moneyness, t_years, d_sigma, params.volga_scale),
    }
}

/// Vol change at one node under the manual scenario mode.
pub fn manual_vol_change(moneyness: f64, t_years: f64, params: &ManualParams) -> VolChange {
    let m_diff = moneyness - 1.0;
    let term_factor = 1.0 / (1.0 + params.term_multiplier * t_years.sqrt());
    let d_sigma = (params.atm_vol_change + params.skew_change * m_diff) * term_factor;
    VolChange {
        d_sigma,
        volga_pnl: volga_pnl(moneyness, t_years, d_sigma, params.volga_scale),
    }
}

/// Vol change at one node, dispatching on the parameter mode.
///
/// Time-to-expiry is `(expiry − reference) / 365.25` years; instruments at
/// or past expiry carry no forward vol exposure and return
/// [`VolChange::zero`].
pub fn compute_vol_change(
    moneyness: f64,
    expiry: Date,
    spot_move: f64,
    params: &VolParams,
    reference: Date,
) -> VolChange {
    let t_years = years_to_expiry(reference, expiry);
    if t_years <= 0.0 {
        return VolChange::zero();
    }
    match params {
        VolParams::Beta(p) => beta_vol_change(moneyness, t_years, spot_move, p),
        VolParams::Manual(p) => manual_vol_change(moneyness, t_years, p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference() -> Date {
        Date::from_ymd(2026, 2, 6).unwrap()
    }

    fn one_year_out() -> Date {
        Date::from_ymd(2027, 2, 6).unwrap()
    }

    // Regression pin for the documented beta formula: moneyness 1.0, expiry
    // one calendar year out (T = 365/365.25), spot -5%, default params.
    #[test]
    fn test_beta_mode_regression_pin() {
        let params = VolParams::Beta(BetaParams::default());
        let change = compute_vol_change(1.0, one_year_out(), -0.05, &params, reference());
        assert_relative_eq!(change.d_sigma, 1.516845672603329, epsilon = 1e-12);
        // ATM: ln(1) = 0, so no volga
        assert_eq!(change.volga_pnl, 0.0);
    }

    #[test]
    fn test_manual_mode_regression_pin() {
        let params = VolParams::Manual(ManualParams {
            atm_vol_change: 2.0,
            ..ManualParams::default()
        });
        let change = compute_vol_change(0.9, one_year_out(), 0.0, &params, reference());
        assert_relative_eq!(change.d_sigma, 1.3268180521525497, epsilon = 1e-12);
        assert_relative_eq!(change.volga_pnl, 0.036667149616250005, epsilon = 1e-12);
    }

    #[test]
    fn test_expired_returns_zero_in_both_modes() {
        let expired = Date::from_ymd(2026, 1, 15).unwrap();
        let today = reference();
        for params in [
            VolParams::Beta(BetaParams::default()),
            VolParams::Manual(ManualParams {
                atm_vol_change: 5.0,
                ..ManualParams::default()
            }),
        ] {
            assert_eq!(
                compute_vol_change(0.9, expired, -0.05, &params, today),
                VolChange::zero()
            );
            // Expiring today counts as expired
            assert_eq!(
                compute_vol_change(0.9, today, -0.05, &params, today),
                VolChange::zero()
            );
        }
    }

    #[test]
    fn test_beta_zero_spot_move_is_zero_change() {
        let change = beta_vol_change(0.9, 1.0, 0.0, &BetaParams::default());
        assert_eq!(change.d_sigma, 0.0);
        assert_eq!(change.volga_pnl, 0.0);
    }

    #[test]
    fn test_beta_skew_asymmetry() {
        // An OTM put (moneyness 0.9) reacts more to a down move than to an
        // equally sized up move.
        let params = BetaParams::default();
        let down_otm = beta_vol_change(0.9, 0.5, -0.03, &params);
        let down_atm = beta_vol_change(1.0, 0.5, -0.03, &params);
        let up_otm = beta_vol_change(0.9, 0.5, 0.03, &params);
        let up_atm = beta_vol_change(1.0, 0.5, 0.03, &params);
        // down: skew_mult = 1 - 0.15*(-0.1)*(+1) = 1.015
        // up:   skew_mult = 1 - 0.15*(-0.1)*(-1) = 0.985
        assert_relative_eq!(down_otm.d_sigma / down_atm.d_sigma, 1.015, epsilon = 1e-12);
        assert_relative_eq!(up_otm.d_sigma / up_atm.d_sigma, 0.985, epsilon = 1e-12);
    }

    #[test]
    fn test_beta_skew_multiplier_clamped() {
        // Extreme moneyness would push the multiplier far past 2 without the
        // clamp; verify the output matches the clamped formula.
        let params = BetaParams::default();
        let change = beta_vol_change(12.0, 1.0, -0.05, &params);
        let ds = -5.0;
        let atm = params.spot_vol_beta * ds + params.convexity * ds * ds * 0.01;
        let term = params.term_floor.max((-params.term_decay * 1.0).exp());
        // raw mult = 1 - 0.15*11*1 = -0.65 -> clamped to 0.5
        assert_relative_eq!(change.d_sigma, atm * 0.5 * term, epsilon = 1e-12);
    }

    #[test]
    fn test_beta_term_floor_kicks_in_long_dated() {
        let params = BetaParams::default();
        // exp(-0.5 * 10) ~ 0.0067 < 0.08 floor
        let change = beta_vol_change(1.0, 10.0, -0.05, &params);
        let ds = -5.0;
        let atm = params.spot_vol_beta * ds + params.convexity * ds * ds * 0.01;
        assert_relative_eq!(change.d_sigma, atm * params.term_floor, epsilon = 1e-12);
    }

    #[test]
    fn test_beta_convexity_amplifies_large_moves() {
        let params = BetaParams::default();
        let small = beta_vol_change(1.0, 1.0, -0.01, &params);
        let large = beta_vol_change(1.0, 1.0, -0.05, &params);
        // Convexity makes the response grow faster than linearly.
        assert!(large.d_sigma > 5.0 * small.d_sigma);
    }

    #[test]
    fn test_manual_term_dampening() {
        let params = ManualParams {
            atm_vol_change: 1.0,
            ..ManualParams::default()
        };
        let short = manual_vol_change(1.0, 0.1, &params);
        let long = manual_vol_change(1.0, 2.0, &params);
        assert!(short.d_sigma > long.d_sigma);
    }

    #[test]
    fn test_volga_factor_caps_near_zero_maturity() {
        assert_eq!(volga_factor(0.7, 0.02), 10.0);
    }

    #[test]
    fn test_volga_factor_zero_at_atm() {
        assert_eq!(volga_factor(1.0, 1.0), 0.0);
    }

    #[test]
    fn test_volga_factor_moneyness_floor() {
        // Degenerate non-positive moneyness is floored rather than NaN
        assert!(volga_factor(0.0, 1.0).is_finite());
        assert!(volga_factor(-1.0, 1.0).is_finite());
    }

    #[test]
    fn test_volga_grows_in_the_wings() {
        let atm = volga_factor(1.0, 0.5);
        let wing = volga_factor(0.8, 0.5);
        let deep_wing = volga_factor(0.7, 0.5);
        assert!(atm < wing && wing < deep_wing);
    }

    #[test]
    fn test_nan_propagates_without_panicking() {
        let change = beta_vol_change(f64::NAN, 1.0, -0.05, &BetaParams::default());
        assert!(change.d_sigma.is_nan());
    }
}
