//! Scenario listing command.

use crate::error::Result;
use vega_risk::HistoricalScenario;

/// List the shipped historical scenarios.
pub fn run() -> Result<()> {
    println!("Available historical scenarios");
    println!("------------------------------------------------------------");
    for scenario in HistoricalScenario::all() {
        let path = scenario.path();
        println!("{:<22} {}", scenario.name(), scenario.date_range());
        println!("{:<22} {} trading days", "", path.days.len());
        println!("{:<22} {}", "", scenario.description());
        println!();
    }
    println!("Replay one with: vegabook replay --scenario <key>");
    println!("Keys: covid2020, volmageddon, lehman, china2015");
    Ok(())
}
