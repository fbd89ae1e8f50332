//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod matrix;
pub mod pnl;
pub mod replay;
pub mod scenarios;

use crate::config::AppConfig;
use crate::error::{CliError, Result};
use vega_models::VolParams;
use vega_risk::InterpMethod;

/// Resolve a mode string to model parameters from the config defaults.
pub(crate) fn vol_params(mode: &str, config: &AppConfig) -> Result<VolParams> {
    match mode {
        "beta" => Ok(VolParams::Beta(config.beta)),
        "manual" => Ok(VolParams::Manual(config.manual)),
        other => Err(CliError::UnknownMode(other.to_string())),
    }
}

/// Resolve a method string to an interpolation method.
pub(crate) fn interp_method(name: &str) -> Result<InterpMethod> {
    match name {
        "linear" => Ok(InterpMethod::Linear),
        "cubic" => Ok(InterpMethod::Cubic),
        other => Err(CliError::UnknownMethod(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vol_params_resolution() {
        let config = AppConfig::default();
        assert_eq!(vol_params("beta", &config).unwrap().mode(), "beta");
        assert_eq!(vol_params("manual", &config).unwrap().mode(), "manual");
        assert!(matches!(
            vol_params("gamma", &config),
            Err(CliError::UnknownMode(_))
        ));
    }

    #[test]
    fn test_interp_method_resolution() {
        assert_eq!(interp_method("linear").unwrap(), InterpMethod::Linear);
        assert_eq!(interp_method("cubic").unwrap(), InterpMethod::Cubic);
        assert!(matches!(
            interp_method("quartic"),
            Err(CliError::UnknownMethod(_))
        ));
    }
}
