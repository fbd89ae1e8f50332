//! VIX-implied surface vol shifts.
//!
//! The stress replay engine translates a daily VIX change into per-cell
//! implied-vol shifts. The VIX is a 30-day tenor index, so shorter-dated
//! options receive proportionally larger vol moves (square-root term decay
//! referenced to the 30-day tenor) and skew effects only activate on down
//! moves, consistent with observed equity vol dynamics.

/// The VIX reference tenor in years (30 calendar days).
const VIX_TENOR_YEARS: f64 = 30.0 / 365.25;
/// Shortest tenor the term scaling distinguishes (15 calendar days).
const MIN_TENOR_YEARS: f64 = 15.0 / 365.25;
/// Floor on the term factor for very long tenors.
const TERM_FACTOR_FLOOR: f64 = 0.08;
/// Spot return below which the down-move skew activates.
const DOWN_MOVE_THRESHOLD: f64 = -0.01;
/// Skew slope per unit moneyness deviation on down moves.
const DOWN_SKEW_SLOPE: f64 = 0.3;

/// Per-cell implied-vol shift (vol points) implied by a daily VIX change.
///
/// # Arguments
///
/// * `vix_change` - Day-on-day VIX difference (index points)
/// * `moneyness` - Strike/spot ratio of the cell
/// * `t_years` - Time to expiry in years
/// * `spot_return` - The day's spot return (fraction)
///
/// # Examples
///
/// ```
/// use vega_models::vix_to_surface_shift;
///
/// // At the 30-day tenor the shift equals the VIX change one-for-one.
/// let shift = vix_to_surface_shift(5.0, 1.0, 30.0 / 365.25, 0.0);
/// assert!((shift - 5.0).abs() < 1e-12);
/// ```
pub fn vix_to_surface_shift(
    vix_change: f64,
    moneyness: f64,
    t_years: f64,
    spot_return: f64,
) -> f64 {
    let term_factor =
        TERM_FACTOR_FLOOR.max((VIX_TENOR_YEARS / t_years.max(MIN_TENOR_YEARS)).sqrt());

    let skew_factor = if spot_return < DOWN_MOVE_THRESHOLD {
        (1.0 - DOWN_SKEW_SLOPE * (moneyness - 1.0)).clamp(0.5, 2.0)
    } else {
        1.0
    };

    vix_change * term_factor * skew_factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_term_factor_at_vix_tenor() {
        assert_relative_eq!(
            vix_to_surface_shift(1.0, 1.0, 30.0 / 365.25, 0.0),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_short_tenor_floored_at_fifteen_days() {
        // Anything at or below 15 days scales like the 15-day tenor: sqrt(2).
        let week = vix_to_surface_shift(1.0, 1.0, 7.0 / 365.25, 0.0);
        let fifteen = vix_to_surface_shift(1.0, 1.0, 15.0 / 365.25, 0.0);
        assert_relative_eq!(week, 2.0_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(week, fifteen, epsilon = 1e-12);
    }

    #[test]
    fn test_long_tenor_term_floor() {
        // sqrt((30/365.25)/20) ~ 0.064 < 0.08 floor
        assert_relative_eq!(
            vix_to_surface_shift(1.0, 1.0, 20.0, 0.0),
            TERM_FACTOR_FLOOR,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_skew_only_activates_on_down_moves() {
        let tenor = 30.0 / 365.25;
        // Down move: OTM put (moneyness 0.9) gets 1 + 0.3*0.1 = 1.03
        assert_relative_eq!(
            vix_to_surface_shift(1.0, 0.9, tenor, -0.05),
            1.03,
            epsilon = 1e-12
        );
        // Up move: no skew
        assert_relative_eq!(
            vix_to_surface_shift(1.0, 0.9, tenor, 0.02),
            1.0,
            epsilon = 1e-12
        );
        // Small down move above the -1% threshold: no skew
        assert_relative_eq!(
            vix_to_surface_shift(1.0, 0.9, tenor, -0.005),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_skew_factor_clamped_for_extreme_wings() {
        let tenor = 30.0 / 365.25;
        // moneyness 5.0 on a down move: 1 - 0.3*4 = -0.2, clamped to 0.5
        assert_relative_eq!(
            vix_to_surface_shift(1.0, 5.0, tenor, -0.05),
            0.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_negative_vix_change_flips_sign() {
        let up = vix_to_surface_shift(2.0, 1.0, 0.5, 0.0);
        let down = vix_to_surface_shift(-2.0, 1.0, 0.5, 0.0);
        assert_relative_eq!(up, -down, epsilon = 1e-12);
    }
}
