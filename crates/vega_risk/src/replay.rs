//! Historical stress-scenario replay.
//!
//! Replays a fixed historical market path day by day: each day's spot return
//! selects (via interpolation) the vega grid the book would have shown, the
//! day's VIX change drives a per-cell surface vol shift, and the resulting
//! P&L accumulates across the path. This is a deterministic fold, not a
//! Monte Carlo simulation: the only carried state is the previous VIX level
//! and the cumulative P&L, and a day with no usable grid degrades to zero
//! impact rather than aborting the run.

use crate::error::EngineError;
use crate::interp::interpolate;
use rayon::prelude::*;
use vega_core::types::{years_to_expiry, Date, SurfaceSet, VegaGrid};
use vega_models::{vix_to_surface_shift, volga_factor, VolParams};

/// Cells with absolute vega below this are economically negligible and are
/// skipped during replay.
pub const MATERIAL_VEGA_THRESHOLD: f64 = 0.001;

/// One day of a historical market path.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioDay {
    /// Day index within the path (0-based)
    pub day: u32,
    /// Spot return for the day (fraction, e.g. -0.0760 for -7.6%)
    pub spot_return: f64,
    /// VIX close for the day
    pub vix: f64,
}

/// A fixed historical market trajectory.
///
/// Immutable, hand-curated reference data with a known schema; see
/// [`crate::presets::HistoricalScenario`] for the shipped paths.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioPath {
    /// Display name
    pub name: String,
    /// Human-readable date range (e.g. "Feb-Mar 2020")
    pub date_range: String,
    /// One-line description of the episode
    pub description: String,
    /// Suggested display colour (hex)
    pub color_hint: String,
    /// The day-by-day path
    pub days: Vec<ScenarioDay>,
}

/// Result of replaying one day.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyResult {
    /// Day index within the path
    pub day: u32,
    /// Spot return in percent (e.g. -7.6)
    pub spot_return_pct: f64,
    /// VIX close
    pub vix: f64,
    /// Day-on-day VIX change (zero on day 0)
    pub vix_change: f64,
    /// P&L for the day
    pub daily_pnl: f64,
    /// Running P&L up to and including the day
    pub cumulative_pnl: f64,
    /// Total vega of the grid used for the day (zero when none)
    pub total_vega: f64,
    /// True when the day's spot return was clamped into the surface range,
    /// or when no grid could be produced at all
    pub clamped: bool,
}

/// Replay results for one named scenario.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioRun {
    /// The scenario's display name
    pub name: String,
    /// Day-by-day results
    pub results: Vec<DailyResult>,
}

/// Replay a historical path against the loaded surfaces.
///
/// `interpolate_fn` supplies the grid for a given (already clamped) spot
/// level — pass [`crate::interp::interpolate`] for the standard linear
/// engine, or a closure wrapping [`crate::interp::interpolate_with`] to
/// replay under the cubic method.
///
/// Per day:
/// 1. Clamp the spot return into the available shift range, surfacing a
///    `clamped` flag (unlike the interpolation engine's silent clamp).
/// 2. Interpolate a grid at the clamped level; a missing grid degrades the
///    day to zero P&L with `clamped = true` and the fold continues.
/// 3. The day-on-day VIX change (day 0: zero) drives a per-cell vol shift
///    via the VIX surface model.
/// 4. Sum cell P&L over all material cells; accumulate the running total.
pub fn run_stress_scenario<F>(
    surfaces: &SurfaceSet,
    scenario: &ScenarioPath,
    interpolate_fn: F,
    params: &VolParams,
    reference: Date,
) -> Vec<DailyResult>
where
    F: Fn(&SurfaceSet, f64) -> Result<VegaGrid, EngineError>,
{
    let volga_scale = params.volga_scale();
    let mut results = Vec::with_capacity(scenario.days.len());
    let mut prev_vix = scenario.days.first().map(|d| d.vix);
    let mut cumulative_pnl = 0.0;

    for day in &scenario.days {
        let vix_change = day.vix - prev_vix.unwrap_or(day.vix);
        prev_vix = Some(day.vix);

        let clamp = surfaces.clamp(day.spot_return);
        let grid = clamp.and_then(|level| interpolate_fn(surfaces, level).ok());

        let (daily_pnl, total_vega, clamped) = match (&grid, clamp) {
            (Some(grid), Some(level)) => {
                let pnl = day_pnl(grid, vix_change, day.spot_return, volga_scale, reference);
                (pnl, grid.total_vega(), (level - day.spot_return).abs() > 0.0)
            }
            // No surfaces or interpolation failure: the day degrades to
            // zero impact, the remaining path still runs.
            _ => (0.0, 0.0, true),
        };

        cumulative_pnl += daily_pnl;
        results.push(DailyResult {
            day: day.day,
            spot_return_pct: day.spot_return * 100.0,
            vix: day.vix,
            vix_change,
            daily_pnl,
            cumulative_pnl,
            total_vega,
            clamped,
        });
    }

    results
}

/// One day's P&L: VIX-implied vol shift applied to every material cell.
fn day_pnl(
    grid: &VegaGrid,
    vix_change: f64,
    spot_return: f64,
    volga_scale: f64,
    reference: Date,
) -> f64 {
    let t_years: Vec<f64> = grid
        .expiries
        .iter()
        .map(|e| years_to_expiry(reference, *e))
        .collect();

    let mut pnl = 0.0;
    for row in &grid.rows {
        for (j, &vega) in row.values.iter().enumerate() {
            if vega.abs() < MATERIAL_VEGA_THRESHOLD {
                continue;
            }
            let d_sigma = vix_to_surface_shift(vix_change, row.moneyness, t_years[j], spot_return);
            let volga = 0.5 * volga_factor(row.moneyness, t_years[j]) * d_sigma * d_sigma;
            // The volga term scales by |vega|*sign(vega) so its sign stays
            // tied to the exposure's sign.
            pnl += vega * d_sigma + volga * volga_scale * vega.abs() * vega.signum();
        }
    }
    pnl
}

/// Replay every scenario in parallel (comparison mode).
///
/// Scenario runs are independent pure computations, so they fan out over
/// rayon; result order matches input order.
pub fn run_all_scenarios(
    surfaces: &SurfaceSet,
    scenarios: &[ScenarioPath],
    params: &VolParams,
    reference: Date,
) -> Vec<ScenarioRun> {
    scenarios
        .par_iter()
        .map(|scenario| ScenarioRun {
            name: scenario.name.clone(),
            results: run_stress_scenario(surfaces, scenario, interpolate, params, reference),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use vega_core::types::GridRow;
    use vega_models::BetaParams;

    fn reference() -> Date {
        Date::from_ymd(2026, 2, 6).unwrap()
    }

    fn surfaces() -> SurfaceSet {
        let expiries = vec![
            Date::from_ymd(2026, 3, 20).unwrap(),
            Date::from_ymd(2026, 12, 18).unwrap(),
        ];
        SurfaceSet::from_grids([-0.075, 0.0, 0.075].iter().map(|&s| {
            VegaGrid::new(
                s,
                expiries.clone(),
                vec![
                    GridRow::new(0.90, vec![20_000.0 * (1.0 - 2.0 * s), 35_000.0]),
                    GridRow::new(1.00, vec![60_000.0, 80_000.0 * (1.0 + s)]),
                ],
            )
            .unwrap()
        }))
    }

    fn path() -> ScenarioPath {
        ScenarioPath {
            name: "Test Crash".to_string(),
            date_range: "T+0 to T+3".to_string(),
            description: "Synthetic four-day drawdown".to_string(),
            color_hint: "#ef4444".to_string(),
            days: vec![
                ScenarioDay { day: 0, spot_return: -0.01, vix: 18.0 },
                ScenarioDay { day: 1, spot_return: -0.035, vix: 26.0 },
                ScenarioDay { day: 2, spot_return: 0.02, vix: 23.5 },
                ScenarioDay { day: 3, spot_return: -0.12, vix: 45.0 },
            ],
        }
    }

    #[test]
    fn test_day_zero_has_no_vix_change() {
        let results = run_stress_scenario(
            &surfaces(),
            &path(),
            interpolate,
            &VolParams::default(),
            reference(),
        );
        assert_eq!(results[0].vix_change, 0.0);
        assert_eq!(results[0].daily_pnl, 0.0);
    }

    #[test]
    fn test_cumulative_is_running_sum() {
        let results = run_stress_scenario(
            &surfaces(),
            &path(),
            interpolate,
            &VolParams::default(),
            reference(),
        );
        let mut running = 0.0;
        for r in &results {
            running += r.daily_pnl;
            assert_relative_eq!(r.cumulative_pnl, running, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_vix_changes_match_path() {
        let results = run_stress_scenario(
            &surfaces(),
            &path(),
            interpolate,
            &VolParams::default(),
            reference(),
        );
        assert_relative_eq!(results[1].vix_change, 8.0, epsilon = 1e-12);
        assert_relative_eq!(results[2].vix_change, -2.5, epsilon = 1e-12);
        assert_relative_eq!(results[3].vix_change, 21.5, epsilon = 1e-12);
    }

    #[test]
    fn test_clamp_flag_surfaces_out_of_range_days() {
        let results = run_stress_scenario(
            &surfaces(),
            &path(),
            interpolate,
            &VolParams::default(),
            reference(),
        );
        // Days 0-2 are inside [-0.075, 0.075]; day 3 (-12%) is clamped.
        assert!(!results[0].clamped);
        assert!(!results[1].clamped);
        assert!(!results[2].clamped);
        assert!(results[3].clamped);
    }

    #[test]
    fn test_empty_surfaces_degrade_to_zero_days() {
        let results = run_stress_scenario(
            &SurfaceSet::new(),
            &path(),
            interpolate,
            &VolParams::default(),
            reference(),
        );
        assert_eq!(results.len(), 4);
        for r in &results {
            assert_eq!(r.daily_pnl, 0.0);
            assert_eq!(r.cumulative_pnl, 0.0);
            assert_eq!(r.total_vega, 0.0);
            assert!(r.clamped);
        }
        // The VIX series still folds normally.
        assert_relative_eq!(results[1].vix_change, 8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_long_vega_book_gains_on_vix_spike() {
        // All-positive vega plus a rising VIX means positive P&L on spike days.
        let results = run_stress_scenario(
            &surfaces(),
            &path(),
            interpolate,
            &VolParams::Beta(BetaParams::default()),
            reference(),
        );
        assert!(results[1].daily_pnl > 0.0);
        assert!(results[3].daily_pnl > 0.0);
        assert!(results[2].daily_pnl < 0.0); // VIX crush day
    }

    #[test]
    fn test_immaterial_cells_are_skipped() {
        let expiries = vec![Date::from_ymd(2026, 6, 19).unwrap()];
        let tiny = SurfaceSet::from_grids([
            VegaGrid::new(-0.075, expiries.clone(), vec![GridRow::new(1.0, vec![0.0005])])
                .unwrap(),
            VegaGrid::new(0.075, expiries, vec![GridRow::new(1.0, vec![0.0009])]).unwrap(),
        ]);
        let results = run_stress_scenario(
            &tiny,
            &path(),
            interpolate,
            &VolParams::default(),
            reference(),
        );
        for r in &results {
            assert_eq!(r.daily_pnl, 0.0);
        }
    }

    #[test]
    fn test_spot_return_reported_in_percent() {
        let results = run_stress_scenario(
            &surfaces(),
            &path(),
            interpolate,
            &VolParams::default(),
            reference(),
        );
        assert_relative_eq!(results[3].spot_return_pct, -12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_run_all_scenarios_preserves_order() {
        let mut second = path();
        second.name = "Second".to_string();
        let runs = run_all_scenarios(
            &surfaces(),
            &[path(), second],
            &VolParams::default(),
            reference(),
        );
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].name, "Test Crash");
        assert_eq!(runs[1].name, "Second");
        assert_eq!(
            runs[0].results,
            run_stress_scenario(
                &surfaces(),
                &path(),
                interpolate,
                &VolParams::default(),
                reference()
            )
        );
    }
}
