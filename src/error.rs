//! Error types for ui-catalog-mcp.
//!
//! A component that is not in the catalog is not an error: lookups return
//! `Option`. The variants here cover configuration loading and catalog
//! construction only.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration file: {path}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ValidationError {
        /// Description of the validation failure.
        message: String,
    },
}

/// Errors raised while building a catalog or parsing catalog inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two records share the same id.
    #[error("duplicate component id: {id}")]
    DuplicateId {
        /// The id that appeared more than once.
        id: String,
    },

    /// A category tag outside the closed category set.
    #[error("unknown category '{value}'")]
    UnknownCategory {
        /// The rejected input.
        value: String,
    },
}
