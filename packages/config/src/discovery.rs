//! Settings file discovery.
//!
//! Looks for a settings file starting from a directory and walking up to the
//! filesystem root, then falls back to the user-level settings file.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

/// Settings file names checked in each directory, in priority order.
pub const SETTINGS_FILE_NAMES: [&str; 3] = ["filegen.toml", "filegen.json", ".vscode/settings.json"];

/// Find the settings file to load.
///
/// An explicit path always wins. Otherwise every directory from `start_dir`
/// up to the filesystem root is checked for [`SETTINGS_FILE_NAMES`], and the
/// user-level settings file is used last.
///
/// # Arguments
///
/// * `explicit` - Path given on the command line, if any
/// * `start_dir` - Directory the upward search starts from
#[must_use]
pub fn discover_settings(explicit: Option<&Path>, start_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        log::debug!("Using explicit settings file {}", path.display());
        return Some(path.to_path_buf());
    }

    log::debug!("Discovering settings from {}", start_dir.display());

    for dir in start_dir.ancestors() {
        for name in SETTINGS_FILE_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                log::debug!("Found settings file {}", candidate.display());
                return Some(candidate);
            }
        }
    }

    user_settings_path().filter(|p| p.is_file())
}

/// The user-level settings file (`<config dir>/filegen/settings.toml`).
#[must_use]
pub fn user_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("filegen").join("settings.toml"))
}

/// Get a short display name for a settings file.
///
/// Paths below `root` are shown relative to it.
#[must_use]
pub fn settings_display_name(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .map_or_else(|_| path.to_string_lossy().to_string(), |p| p.to_string_lossy().to_string())
}
