//! Vegabook CLI - Command Line Operations for the Vega Scenario P&L Engine
//!
//! # Commands
//!
//! - `vegabook pnl --spot-move -0.05` - Project P&L for a single scenario
//! - `vegabook matrix` - P&L ladder across spot moves
//! - `vegabook replay --scenario covid2020` - Replay a historical crisis
//! - `vegabook scenarios` - List the shipped historical scenarios
//! - `vegabook check` - Inspect configuration and loaded surfaces
//!
//! Surfaces load from a JSON file (`--surfaces book.json`); without one, a
//! deterministic demo book is generated so every command can run out of the
//! box. Parameter defaults come from an optional TOML file
//! (`--config vegabook.toml`).

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vega_core::types::{Date, SurfaceSet};

mod commands;
mod config;
mod error;
mod surfaces;
mod synthetic;

pub use error::{CliError, Result};

use config::AppConfig;

/// Vegabook scenario P&L CLI
#[derive(Parser)]
#[command(name = "vegabook")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "vegabook.toml")]
    config: String,

    /// Vega surfaces JSON file (omit to use the built-in demo book)
    #[arg(short, long, global = true)]
    surfaces: Option<String>,

    /// Reference date (YYYY-MM-DD); defaults to the config file, then today
    #[arg(short, long, global = true)]
    reference_date: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project P&L for a single spot/vol scenario
    Pnl {
        /// Spot move as a fraction (e.g. -0.05 for -5%)
        #[arg(long, allow_hyphen_values = true, default_value = "-0.05")]
        spot_move: f64,

        /// Vol model mode (beta, manual)
        #[arg(short, long, default_value = "beta")]
        mode: String,

        /// Interpolation method (linear, cubic)
        #[arg(long, default_value = "linear")]
        method: String,
    },

    /// P&L ladder across a range of spot moves
    Matrix {
        /// Vol model mode (beta, manual)
        #[arg(short, long, default_value = "beta")]
        mode: String,
    },

    /// Replay a historical stress scenario day by day
    Replay {
        /// Scenario key (e.g. covid2020, volmageddon, lehman, china2015)
        #[arg(short = 'n', long)]
        scenario: Option<String>,

        /// Replay every shipped scenario and compare end points
        #[arg(long)]
        all: bool,

        /// Vol model mode used for the volga scaling (beta, manual)
        #[arg(short, long, default_value = "beta")]
        mode: String,
    },

    /// List the shipped historical scenarios
    Scenarios,

    /// Check configuration, surfaces, and parameter defaults
    Check,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config = AppConfig::load(&cli.config)?;
    let reference = resolve_reference_date(&cli, &config)?;
    let book = load_book(&cli, reference)?;
    info!(surfaces = book.len(), %reference, "surfaces loaded");

    match cli.command {
        Commands::Pnl {
            spot_move,
            mode,
            method,
        } => commands::pnl::run(&book, spot_move, &mode, &method, &config, reference),
        Commands::Matrix { mode } => commands::matrix::run(&book, &mode, &config, reference),
        Commands::Replay {
            scenario,
            all,
            mode,
        } => commands::replay::run(&book, scenario.as_deref(), all, &mode, &config, reference),
        Commands::Scenarios => commands::scenarios::run(),
        Commands::Check => commands::check::run(&cli.config, &book, &config, reference),
    }
}

/// CLI flag beats the config file beats the wall clock.
fn resolve_reference_date(cli: &Cli, config: &AppConfig) -> Result<Date> {
    if let Some(s) = &cli.reference_date {
        return Ok(Date::parse(s)?);
    }
    Ok(config.reference_date.unwrap_or_else(Date::today))
}

fn load_book(cli: &Cli, reference: Date) -> Result<SurfaceSet> {
    match &cli.surfaces {
        Some(path) => surfaces::load_surfaces(path),
        None => {
            info!("no surfaces file given; generating demo book");
            Ok(synthetic::demo_surfaces(reference))
        }
    }
}
