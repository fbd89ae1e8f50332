//! TOML configuration for parameter defaults.
//!
//! A missing config file is not an error: every field has a default, and the
//! file only overrides what it names, e.g.
//!
//! ```toml
//! reference_date = "2026-02-06"
//!
//! [beta]
//! spot_vol_beta = -0.45
//! term_decay = 0.80
//!
//! [manual]
//! atm_vol_change = 2.0
//! ```

use crate::error::Result;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;
use vega_core::types::Date;
use vega_models::{BetaParams, ManualParams};

/// Parameter defaults loaded from `vegabook.toml`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Reference date for all time-to-expiry computations
    pub reference_date: Option<Date>,
    /// Beta model defaults
    pub beta: BetaParams,
    /// Manual mode defaults
    pub manual: ManualParams,
}

impl AppConfig {
    /// Load the config file, falling back to defaults when it is absent.
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            debug!(path, "config file not found, using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = AppConfig::load("/nonexistent/vegabook.toml").unwrap();
        assert_eq!(config.beta, BetaParams::default());
        assert_eq!(config.manual, ManualParams::default());
        assert!(config.reference_date.is_none());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: AppConfig = toml::from_str(
            r#"
            reference_date = "2026-02-06"

            [beta]
            spot_vol_beta = -0.45
            "#,
        )
        .unwrap();
        assert_eq!(
            config.reference_date,
            Some(Date::from_ymd(2026, 2, 6).unwrap())
        );
        assert_eq!(config.beta.spot_vol_beta, -0.45);
        // Unnamed fields keep their defaults
        assert_eq!(config.beta.term_decay, BetaParams::default().term_decay);
        assert_eq!(config.manual, ManualParams::default());
    }
}
