//! Workspace folders.
//!
//! A workspace is an ordered list of root folders. Files are attributed to
//! the deepest folder that contains them.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use crate::path_utils::{SEPARATOR, basename, normalize};

/// A single workspace root folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceFolder {
    /// Display name (defaults to the folder's last path segment).
    pub name: String,
    /// Normalized absolute path of the folder.
    pub path: String,
    /// Position of the folder in the workspace.
    pub index: usize,
}

impl WorkspaceFolder {
    /// Whether `file_path` is this folder or lies beneath it.
    #[must_use]
    pub fn contains(&self, file_path: &str) -> bool {
        if file_path == self.path {
            return true;
        }

        let prefix = if self.path.ends_with(SEPARATOR) {
            self.path.clone()
        } else {
            format!("{}{SEPARATOR}", self.path)
        };
        file_path.starts_with(&prefix)
    }
}

/// The set of workspace folders for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workspace {
    folders: Vec<WorkspaceFolder>,
}

impl Workspace {
    /// Build a workspace from folder paths, naming each after its last segment.
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let folders = paths
            .into_iter()
            .enumerate()
            .map(|(index, path)| {
                let path = normalize(path.as_ref());
                WorkspaceFolder {
                    name: basename(&path).to_string(),
                    path,
                    index,
                }
            })
            .collect();

        Self { folders }
    }

    /// Build a workspace from explicit folders.
    #[must_use]
    pub const fn with_folders(folders: Vec<WorkspaceFolder>) -> Self {
        Self { folders }
    }

    /// All folders in order.
    #[must_use]
    pub fn folders(&self) -> &[WorkspaceFolder] {
        &self.folders
    }

    /// Whether the workspace has no folders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Number of folders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    /// The first folder, used when a file belongs to no folder.
    #[must_use]
    pub fn default_folder(&self) -> Option<&WorkspaceFolder> {
        self.folders.first()
    }

    /// Look up a folder by its display name.
    #[must_use]
    pub fn folder_by_name(&self, name: &str) -> Option<&WorkspaceFolder> {
        self.folders.iter().find(|f| f.name == name)
    }

    /// The deepest folder containing `file_path`.
    #[must_use]
    pub fn folder_for_file(&self, file_path: &str) -> Option<&WorkspaceFolder> {
        self.folders
            .iter()
            .filter(|f| f.contains(file_path))
            .max_by_key(|f| f.path.len())
    }

    /// The root path of the folder containing `file_path`.
    #[must_use]
    pub fn root_for_file(&self, file_path: &str) -> Option<&str> {
        self.folder_for_file(file_path).map(|f| f.path.as_str())
    }
}
