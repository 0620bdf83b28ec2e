//! Error types for settings loading and configuration selection.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during settings loading and configuration selection.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the settings file.
    #[error("Failed to read settings file {}: {source}", path.display())]
    ReadError {
        /// Path to the file that couldn't be read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML settings.
    #[error("Failed to parse TOML settings {}: {source}", path.display())]
    TomlParseError {
        /// Path to the file that couldn't be parsed.
        path: PathBuf,
        /// The underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to parse JSON settings.
    #[error("Failed to parse JSON settings {}: {source}", path.display())]
    JsonParseError {
        /// Path to the file that couldn't be parsed.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The configuration list does not match the expected schema.
    #[error("Invalid configurations in {}: {source}", path.display())]
    InvalidSettings {
        /// Path to the settings file.
        path: PathBuf,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// Unsupported settings format.
    #[error("Unsupported settings format: {0}")]
    UnsupportedFormat(String),

    /// No configuration entries are available.
    #[error("Unable to get configurations, make sure to have an entry in 'fileGenTaskRunner.configs'.")]
    NoConfigurations,

    /// No configuration matched the selection.
    #[error(
        "Unable to find configurations, make sure to have a valid 'fileGenTaskRunner.configs' settings."
    )]
    ConfigurationNotFound,
}
