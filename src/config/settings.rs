//! Configuration structures for deserialisation.
//!
//! These structures map directly to the JSON configuration file format.

use serde::Deserialize;

use crate::catalog::SearchOptions;
use crate::error::ConfigError;

/// Root configuration structure.
///
/// This is the top-level structure that matches the JSON config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default)]
    _schema: Option<String>,

    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// Search settings.
    #[serde(default)]
    pub search: SearchConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Invalid log level '{}'. Must be one of: {}",
                    self.logging.level,
                    valid_levels.join(", ")
                ),
            });
        }

        if self.search.default_limit == 0 {
            return Err(ConfigError::ValidationError {
                message: "search.default_limit must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

/// Search configuration.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Match search queries against component ids as well as names and
    /// descriptions.
    #[serde(default = "default_true")]
    pub match_id: bool,

    /// Page size for search results when the caller gives no limit.
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

impl SearchConfig {
    /// Returns the catalog search options for this configuration.
    #[must_use]
    pub const fn options(&self) -> SearchOptions {
        SearchOptions {
            match_id: self.match_id,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            match_id: default_true(),
            default_limit: default_limit(),
        }
    }
}

const fn default_true() -> bool {
    true
}

const fn default_limit() -> usize {
    50
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
