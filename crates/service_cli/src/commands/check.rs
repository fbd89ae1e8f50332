//! Configuration check command.

use crate::config::AppConfig;
use crate::error::Result;
use vega_core::types::{Date, SurfaceSet};

/// Print the effective configuration and the loaded book's shape.
pub fn run(config_path: &str, book: &SurfaceSet, config: &AppConfig, reference: Date) -> Result<()> {
    println!("vegabook configuration check");
    println!("----------------------------------------");
    println!("config file:     {}", config_path);
    println!("reference date:  {}", reference);
    println!();

    println!("surfaces loaded: {}", book.len());
    match book.shift_range() {
        Some((min, max)) => println!("shift range:     {:+.1}% to {:+.1}%", min * 100.0, max * 100.0),
        None => println!("shift range:     (none)"),
    }
    for grid in book.grids() {
        println!(
            "  {:+6.2}%  {} strikes x {} expiries, total vega {:>12.0}",
            grid.spot_shift * 100.0,
            grid.n_rows(),
            grid.n_expiries(),
            grid.total_vega()
        );
    }
    println!();

    println!("beta defaults:   {:?}", config.beta);
    println!("manual defaults: {:?}", config.manual);
    Ok(())
}
