//! CLI error types.

use thiserror::Error;
use vega_core::types::{DateError, GridError};
use vega_risk::EngineError;

/// Convenience alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the vegabook CLI.
#[derive(Error, Debug)]
pub enum CliError {
    /// Filesystem access failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The surfaces JSON file did not parse.
    #[error("failed to parse surfaces file: {0}")]
    SurfacesParse(#[from] serde_json::Error),

    /// The TOML config file did not parse.
    #[error("failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A surfaces file contained a malformed grid.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// A date argument did not parse.
    #[error(transparent)]
    Date(#[from] DateError),

    /// The engine rejected the inputs.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Unknown vol model mode.
    #[error("unknown vol mode '{0}' (expected 'beta' or 'manual')")]
    UnknownMode(String),

    /// Unknown interpolation method.
    #[error("unknown interpolation method '{0}' (expected 'linear' or 'cubic')")]
    UnknownMethod(String),

    /// Unknown historical scenario key.
    #[error("unknown scenario '{0}' (run `vegabook scenarios` for the list)")]
    UnknownScenario(String),
}
