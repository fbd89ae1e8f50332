//! Deterministic demo surfaces.
//!
//! Generates a plausible index vega book so every CLI command works without
//! an input file: vega peaks at the money, grows roughly with the square
//! root of tenor, and tilts toward the put wing as spot shifts down (the
//! book picks up downside vega when the market falls). Deliberately free of
//! randomness so demo output is reproducible run to run.

use vega_core::types::{Date, GridRow, SurfaceSet, VegaGrid};

const SHIFTS: [f64; 7] = [-0.075, -0.05, -0.025, 0.0, 0.025, 0.05, 0.075];
const MONEYNESS: [f64; 9] = [0.80, 0.85, 0.90, 0.95, 1.00, 1.05, 1.10, 1.15, 1.20];
const EXPIRY_DAYS: [i64; 6] = [30, 91, 182, 365, 548, 730];

/// ATM vega of the shortest tenor, in premium currency per vol point.
const BASE_VEGA: f64 = 120_000.0;

/// Build the demo book at seven shift levels around the reference date.
pub fn demo_surfaces(reference: Date) -> SurfaceSet {
    let expiries: Vec<Date> = EXPIRY_DAYS
        .iter()
        .map(|&d| reference.offset_days(d))
        .collect();

    SurfaceSet::from_grids(SHIFTS.iter().map(|&shift| {
        let rows = MONEYNESS
            .iter()
            .map(|&m| {
                let values = EXPIRY_DAYS
                    .iter()
                    .map(|&days| cell_vega(shift, m, days))
                    .collect();
                GridRow::new(m, values)
            })
            .collect();
        VegaGrid::new(shift, expiries.clone(), rows)
            .unwrap()
            .with_computed_total_row()
    }))
}

fn cell_vega(shift: f64, moneyness: f64, expiry_days: i64) -> f64 {
    // Gaussian smile in moneyness, sqrt growth in tenor
    let smile = (-((moneyness - 1.0) / 0.13).powi(2)).exp();
    let tenor = (expiry_days as f64 / 365.25).sqrt();
    // Down shifts move exposure toward the put wing
    let tilt = 1.0 - 3.0 * shift * (1.0 - moneyness);
    BASE_VEGA * smile * tenor * tilt
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference() -> Date {
        Date::from_ymd(2026, 2, 6).unwrap()
    }

    #[test]
    fn test_demo_book_shape() {
        let set = demo_surfaces(reference());
        assert_eq!(set.len(), 7);
        assert_eq!(set.shift_range(), Some((-0.075, 0.075)));
        for grid in set.grids() {
            assert_eq!(grid.n_rows(), 9);
            assert_eq!(grid.n_expiries(), 6);
            assert!(grid.total_row.is_some());
        }
    }

    #[test]
    fn test_demo_book_is_deterministic() {
        let a = demo_surfaces(reference());
        let b = demo_surfaces(reference());
        assert_eq!(a, b);
    }

    #[test]
    fn test_vega_peaks_at_the_money() {
        let set = demo_surfaces(reference());
        let grid = set.get(0.0).unwrap();
        let atm_row = grid.rows.iter().find(|r| r.moneyness == 1.0).unwrap();
        for row in &grid.rows {
            assert!(row.total <= atm_row.total);
        }
    }

    #[test]
    fn test_down_shift_tilts_to_put_wing() {
        let set = demo_surfaces(reference());
        let down = set.get(-0.075).unwrap();
        let flat = set.get(0.0).unwrap();
        // Put-wing vega (moneyness 0.85) grows on the down shift
        assert!(down.rows[1].total > flat.rows[1].total);
        // ATM vega is unchanged by the tilt
        assert_relative_eq!(down.rows[4].total, flat.rows[4].total, epsilon = 1e-9);
    }
}
