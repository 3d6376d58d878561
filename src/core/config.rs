//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address and asset paths are not here; they come from
//! `[package.metadata.leptos]` and the `LEPTOS_*` variables.

use thiserror::Error;

/// Default tracing directive when `LOG_FILTER` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} must be one of on/off/true/false/1/0, got {value:?}")]
    InvalidFlag { name: &'static str, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `info` or `enigma_studio=debug`
    pub log_filter: String,

    /// Brotli/gzip response compression
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys take their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let log_filter = get("LOG_FILTER").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let compression = match get("COMPRESSION") {
            Some(value) => parse_flag("COMPRESSION", &value)?,
            None => true,
        };

        Ok(Self {
            log_filter,
            compression,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            compression: true,
        }
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Ok(true),
        "off" | "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ========================================================================
    // Lookup-based tests (no process env access - thread safe)
    // ========================================================================

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_filter, "info");
        assert!(config.compression);
    }

    #[test]
    fn test_reads_all_fields() {
        let config = Config::from_lookup(lookup(&[
            ("LOG_FILTER", "enigma_studio=debug,tower_http=warn"),
            ("COMPRESSION", "off"),
        ]))
        .unwrap();

        assert_eq!(config.log_filter, "enigma_studio=debug,tower_http=warn");
        assert!(!config.compression);
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup(&[("LOG_FILTER", "  "), ("COMPRESSION", "")])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_flag_spellings() {
        for value in ["on", "TRUE", "1", "yes"] {
            let config = Config::from_lookup(lookup(&[("COMPRESSION", value)])).unwrap();
            assert!(config.compression, "{value}");
        }
        for value in ["off", "False", "0", "no"] {
            let config = Config::from_lookup(lookup(&[("COMPRESSION", value)])).unwrap();
            assert!(!config.compression, "{value}");
        }
    }

    #[test]
    fn test_invalid_flag_is_rejected() {
        let err = Config::from_lookup(lookup(&[("COMPRESSION", "maybe")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidFlag {
                name: "COMPRESSION",
                value: "maybe".to_string()
            }
        );
        assert!(err.to_string().contains("COMPRESSION"));
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so only the shape is checked
        if let Ok(config) = Config::from_env() {
            assert!(!config.log_filter.is_empty());
        }
    }
}
