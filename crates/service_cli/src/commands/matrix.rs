//! Scenario matrix command.

use super::vol_params;
use crate::config::AppConfig;
use crate::error::Result;
use vega_core::types::{Date, SurfaceSet};
use vega_models::VolParams;
use vega_risk::{
    compute_spot_ladder, compute_vol_ladder, default_spot_moves, default_vol_overrides,
};

/// P&L ladder across spot moves; 2-D spot x vol grid in manual mode.
pub fn run(book: &SurfaceSet, mode: &str, config: &AppConfig, reference: Date) -> Result<()> {
    let params = vol_params(mode, config)?;
    let moves = default_spot_moves();

    match params {
        VolParams::Beta(_) => {
            let ladder = compute_spot_ladder(book, &moves, &params, reference)?;

            println!("Spot ladder ({} mode)", params.mode());
            println!("----------------------------------------");
            println!("{:>8}  {:>15}", "spot", "total P&L");
            for point in &ladder {
                println!("{:>+7.1}%  {:>15.0}", point.spot_move * 100.0, point.total_pnl);
            }
        }
        VolParams::Manual(manual) => {
            let overrides = default_vol_overrides();
            let ladder = compute_vol_ladder(book, &moves, &overrides, &manual, reference)?;

            println!("Spot x vol ladder (manual mode)");
            println!("----------------------------------------");
            print!("{:>8}", "spot");
            for dv in &overrides {
                print!("  {:>12}", format!("vol {:+.0}", dv));
            }
            println!();
            for point in &ladder {
                print!("{:>+7.1}%", point.spot_move * 100.0);
                for (_, pnl) in &point.by_vol_change {
                    print!("  {:>12.0}", pnl);
                }
                println!();
            }
        }
    }

    Ok(())
}
