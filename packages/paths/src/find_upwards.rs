//! Upward search for a directory containing a marker file.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::{Path, PathBuf};

use path_clean::PathClean;

/// Outcome of an upward marker search.
///
/// Not finding the marker is not a failure: the search always ends on some
/// directory, and the variant says why it stopped there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpwardSearch {
    /// The directory that contains the marker.
    Found(String),
    /// The declared boundary was reached without finding the marker.
    Boundary(String),
    /// The filesystem root was reached without finding the marker.
    FilesystemRoot(String),
}

impl UpwardSearch {
    /// The matching directory, if the marker was found.
    #[must_use]
    pub fn found(&self) -> Option<&str> {
        match self {
            Self::Found(dir) => Some(dir),
            Self::Boundary(_) | Self::FilesystemRoot(_) => None,
        }
    }

    /// The directory the search stopped on, found or not.
    #[must_use]
    pub fn directory(&self) -> &str {
        match self {
            Self::Found(dir) | Self::Boundary(dir) | Self::FilesystemRoot(dir) => dir,
        }
    }
}

/// Search upward from `start_dir` for a directory containing `marker`.
///
/// `marker` is an exact file or directory name (`package.json`), or an
/// extension pattern of the form `*.csproj` that matches any entry ending in
/// that extension.
///
/// The search stops at `boundary` when given, and always at the filesystem
/// root.
///
/// # Arguments
///
/// * `start_dir` - Directory to start from (relative paths use the current directory)
/// * `marker` - File name or `*.ext` pattern to look for
/// * `boundary` - Optional directory above which the search does not go
#[must_use]
pub fn find_file_dir_upwards(start_dir: &str, marker: &str, boundary: Option<&str>) -> UpwardSearch {
    log::debug!("Searching upward from {start_dir} for {marker}");

    let boundary = boundary.map(|b| Path::new(b).clean());
    let mut current = absolute(start_dir);

    loop {
        if contains_marker(&current, marker) {
            log::debug!("Found {marker} in {}", current.display());
            return UpwardSearch::Found(current.to_string_lossy().into_owned());
        }

        if boundary.as_deref() == Some(current.as_path()) {
            log::debug!("Reached boundary {} without {marker}", current.display());
            return UpwardSearch::Boundary(current.to_string_lossy().into_owned());
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => {
                log::debug!("Reached filesystem root without {marker}");
                return UpwardSearch::FilesystemRoot(current.to_string_lossy().into_owned());
            }
        }
    }
}

fn absolute(dir: &str) -> PathBuf {
    let cleaned = Path::new(if dir.is_empty() { "." } else { dir }).clean();
    if cleaned.is_absolute() {
        cleaned
    } else {
        std::path::absolute(&cleaned).map_or(cleaned, |p| p.clean())
    }
}

fn contains_marker(dir: &Path, marker: &str) -> bool {
    if let Some(extension) = marker.strip_prefix('*') {
        return fs::read_dir(dir).is_ok_and(|entries| {
            entries
                .filter_map(Result::ok)
                .any(|entry| entry.file_name().to_string_lossy().ends_with(extension))
        });
    }

    dir.join(marker).exists()
}
