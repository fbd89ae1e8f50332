//! Single-scenario P&L command.

use super::{interp_method, vol_params};
use crate::config::AppConfig;
use crate::error::Result;
use tracing::warn;
use vega_core::types::{Date, SurfaceSet};
use vega_risk::interpolate_with;

/// Project P&L for one spot/vol scenario and print the breakdown.
pub fn run(
    book: &SurfaceSet,
    spot_move: f64,
    mode: &str,
    method: &str,
    config: &AppConfig,
    reference: Date,
) -> Result<()> {
    let params = vol_params(mode, config)?;
    let method = interp_method(method)?;

    if let Some(clamped) = book.clamp(spot_move) {
        if (clamped - spot_move).abs() > 0.0 {
            warn!(
                requested = spot_move,
                effective = clamped,
                "spot move outside surface range, clamped"
            );
        }
    }

    let grid = interpolate_with(book, spot_move, method)?;
    let Some(result) = vega_risk::compute_pnl(&grid, spot_move, &params, reference) else {
        println!("No vega data loaded; nothing to compute.");
        return Ok(());
    };

    println!("========================================");
    println!("Scenario P&L  (spot {:+.2}%, {} mode)", spot_move * 100.0, params.mode());
    println!("========================================");
    println!();
    println!("Total P&L:          {:>15.0}", result.total_pnl);
    println!("  of which volga:   {:>15.0}", result.volga_pnl);
    println!("Total vega:         {:>15.0}", grid.total_vega());
    println!();

    println!("P&L by maturity bucket");
    println!("----------------------------------------");
    for bucket in &result.by_bucket {
        println!("{:>8}  {:>15.0}", bucket.bucket.label(), bucket.pnl);
    }
    println!();

    println!("P&L by expiry");
    println!("----------------------------------------");
    for entry in &result.by_expiry {
        println!(
            "{}  {:>6}  {:>15.0}",
            entry.expiry,
            entry.bucket.label(),
            entry.pnl
        );
    }
    println!();

    println!("P&L by moneyness");
    println!("----------------------------------------");
    for entry in &result.by_moneyness {
        println!("{:>6.2}  {:>15.0}", entry.moneyness, entry.pnl);
    }

    Ok(())
}
