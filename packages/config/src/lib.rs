//! Settings loading for filegen.
//!
//! This crate provides the settings records, the immutable [`Configuration`]
//! view built from them, and settings file discovery and loading.
//!
//! # Supported Settings Formats
//!
//! * TOML (`filegen.toml`, user-level `settings.toml`)
//! * JSON with comments (`filegen.json`, `.vscode/settings.json`)
//!
//! Both hold the configuration list under the key
//! [`SETTINGS_KEY`], written either as one dotted key or as nested tables.
//!
//! # Example
//!
//! ```rust,ignore
//! use filegen_config::{Configuration, discover_settings, load_settings};
//!
//! let path = discover_settings(None, &std::env::current_dir()?).unwrap();
//! let loaded = load_settings(&path)?;
//! for entry in &loaded.configs {
//!     let config = Configuration::new(entry, None);
//!     println!("{}: {}", config.label(), config.description());
//! }
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod configuration;
mod discovery;
mod error;
mod json_loader;
mod toml_loader;
mod types;

pub use configuration::{Configuration, DEFAULT_SOURCE_DIR, Task};
pub use discovery::{
    SETTINGS_FILE_NAMES, discover_settings, settings_display_name, user_settings_path,
};
pub use error::ConfigError;
pub use json_loader::{load_json_settings, strip_jsonc};
pub use toml_loader::load_toml_settings;
pub use types::{
    ConfigEntry, DefaultLocation, FileSuffixType, LoadedSettings, PromptItem, TaskDefinition,
    Template, TerminalInstanceType, UserInputPrompt,
};

use std::path::Path;

/// Settings key holding the configuration list.
pub const SETTINGS_KEY: &str = "fileGenTaskRunner.configs";

/// Load a settings file, auto-detecting the format based on extension.
///
/// # Errors
///
/// * If the file extension is not supported
/// * If the file cannot be read
/// * If the file cannot be parsed
pub fn load_settings(path: &Path) -> Result<LoadedSettings, ConfigError> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    let configs = match extension {
        "toml" => load_toml_settings(path)?,
        "json" => load_json_settings(path)?,
        _ => return Err(ConfigError::UnsupportedFormat(extension.to_string())),
    };

    log::debug!(
        "Loaded {} configuration(s) from {}",
        configs.len(),
        path.display()
    );

    Ok(LoadedSettings {
        configs,
        settings_path: path.to_path_buf(),
    })
}

/// Find the configuration a label refers to.
///
/// A configuration with that label wins; otherwise the first configuration
/// owning a task with that label is returned.
#[must_use]
pub fn find_config_by_label<'a>(configs: &'a [ConfigEntry], label: &str) -> Option<&'a ConfigEntry> {
    configs
        .iter()
        .find(|c| c.label == label)
        .or_else(|| {
            configs
                .iter()
                .find(|c| c.tasks.iter().any(|t| t.label == label))
        })
}

/// Extract the configuration list from a parsed settings document.
///
/// The flat dotted key is checked first, then the nested form.
pub(crate) fn configs_from_document(
    document: &serde_json::Value,
    path: &Path,
) -> Result<Vec<ConfigEntry>, ConfigError> {
    let value = document.get(SETTINGS_KEY).or_else(|| {
        SETTINGS_KEY
            .split('.')
            .try_fold(document, |node, key| node.get(key))
    });

    let Some(value) = value else {
        log::warn!("No '{SETTINGS_KEY}' entry in {}", path.display());
        return Ok(Vec::new());
    };

    serde_json::from_value(value.clone()).map_err(|e| ConfigError::InvalidSettings {
        path: path.to_path_buf(),
        source: e,
    })
}
