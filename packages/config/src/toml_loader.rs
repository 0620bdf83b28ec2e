//! TOML settings file loader.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::types::ConfigEntry;

/// Load configurations from a TOML settings file.
///
/// The list may be written as nested tables (`[[fileGenTaskRunner.configs]]`)
/// or under the quoted dotted key (`"fileGenTaskRunner.configs" = [...]`).
/// A file without the key yields an empty list.
///
/// # Arguments
///
/// * `path` - Path to the TOML settings file
///
/// # Errors
///
/// * If the file cannot be read
/// * If the file cannot be parsed as TOML
/// * If the configurations do not match the expected schema
pub fn load_toml_settings(path: &Path) -> Result<Vec<ConfigEntry>, ConfigError> {
    log::debug!("Loading TOML settings from {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let table: toml::Table = toml::from_str(&content).map_err(|e| ConfigError::TomlParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    // Serialize through JSON so both formats share one lookup and schema check.
    let document = serde_json::to_value(&table).map_err(|e| ConfigError::InvalidSettings {
        path: path.to_path_buf(),
        source: e,
    })?;

    crate::configs_from_document(&document, path)
}
