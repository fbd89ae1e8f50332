//! Historical stress replay command.

use super::vol_params;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use tracing::warn;
use vega_core::types::{Date, SurfaceSet};
use vega_risk::{
    interpolate, run_all_scenarios, run_stress_scenario, DailyResult, HistoricalScenario,
};

/// Replay one (or every) historical scenario against the loaded book.
pub fn run(
    book: &SurfaceSet,
    scenario_key: Option<&str>,
    all: bool,
    mode: &str,
    config: &AppConfig,
    reference: Date,
) -> Result<()> {
    let params = vol_params(mode, config)?;

    if all {
        let runs = run_all_scenarios(book, &HistoricalScenario::all_paths(), &params, reference);

        println!("Scenario comparison");
        println!("------------------------------------------------------------");
        println!("{:<22} {:>6}  {:>15}  {:>8}", "scenario", "days", "final P&L", "clamped");
        for run in &runs {
            let clamped_days = run.results.iter().filter(|r| r.clamped).count();
            let final_pnl = run.results.last().map(|r| r.cumulative_pnl).unwrap_or(0.0);
            println!(
                "{:<22} {:>6}  {:>15.0}  {:>8}",
                run.name,
                run.results.len(),
                final_pnl,
                clamped_days
            );
        }
        return Ok(());
    }

    let key = scenario_key.unwrap_or("covid2020");
    let scenario = HistoricalScenario::from_key(key)
        .ok_or_else(|| CliError::UnknownScenario(key.to_string()))?;
    let path = scenario.path();

    let results = run_stress_scenario(book, &path, interpolate, &params, reference);

    let clamped_days = results.iter().filter(|r| r.clamped).count();
    if clamped_days > 0 {
        warn!(
            days = clamped_days,
            "spot returns outside the surface range were clamped"
        );
    }

    println!("========================================");
    println!("{}  ({})", path.name, path.date_range);
    println!("{}", path.description);
    println!("========================================");
    println!();
    println!(
        "{:>4}  {:>8}  {:>7}  {:>7}  {:>14}  {:>14}  {:>3}",
        "day", "spot", "VIX", "dVIX", "daily P&L", "cum P&L", ""
    );
    for r in &results {
        print_day(r);
    }

    Ok(())
}

fn print_day(r: &DailyResult) {
    println!(
        "{:>4}  {:>+7.2}%  {:>7.2}  {:>+7.2}  {:>14.0}  {:>14.0}  {:>3}",
        r.day,
        r.spot_return_pct,
        r.vix,
        r.vix_change,
        r.daily_pnl,
        r.cumulative_pnl,
        if r.clamped { "*" } else { "" }
    );
}
