//! Build-time configuration.
//!
//! The landing page is a static bundle, so "environment" means the values
//! baked in by `trunk build`:
//!
//! - `SUI_NETWORK` - network identifier used when no wallet reports one
//! - `NARVAL_LOG` - maximum log level (`error`..`trace` or `1`..`5`)

use thiserror::Error;
use tracing::Level;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid log level `{value}` in NARVAL_LOG: {reason}")]
    InvalidLogLevel { value: String, reason: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Configured fallback network identifier.
    pub network: Option<&'static str>,
    pub log_filter: Option<&'static str>,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("SUI_NETWORK"), option_env!("NARVAL_LOG"))
    }

    /// Empty values count as unset.
    pub fn from_values(network: Option<&'static str>, log_filter: Option<&'static str>) -> Self {
        Self {
            network: network.filter(|v| !v.is_empty()),
            log_filter: log_filter.filter(|v| !v.trim().is_empty()),
        }
    }

    pub fn max_level(&self) -> Result<Level, ConfigError> {
        match self.log_filter {
            None => Ok(Level::INFO),
            Some(raw) => raw
                .trim()
                .parse::<Level>()
                .map_err(|e| ConfigError::InvalidLogLevel {
                    value: raw.to_string(),
                    reason: e.to_string(),
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_values_are_unset() {
        let config = AppConfig::from_values(Some(""), Some("  "));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn network_kept_verbatim() {
        // no trimming: the gate compares exactly what was configured
        let config = AppConfig::from_values(Some(" testnet"), None);
        assert_eq!(config.network, Some(" testnet"));
    }

    #[test]
    fn default_level_is_info() {
        assert_eq!(AppConfig::default().max_level(), Ok(Level::INFO));
    }

    #[test]
    fn level_names_and_numbers_parse() {
        let debug = AppConfig::from_values(None, Some("DEBUG"));
        assert_eq!(debug.max_level(), Ok(Level::DEBUG));

        let trace = AppConfig::from_values(None, Some("5"));
        assert_eq!(trace.max_level(), Ok(Level::TRACE));
    }

    #[test]
    fn garbage_level_is_an_error() {
        let config = AppConfig::from_values(None, Some("loud"));
        let err = config.max_level().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel { ref value, .. } if value == "loud"));
        assert!(err.to_string().contains("NARVAL_LOG"));
    }
}
