//! Path model and path utilities for filegen.
//!
//! This crate provides the leaf building blocks used by every other filegen
//! package:
//!
//! * [`SourceFile`] - a file path plus the facts derived from it
//! * [`Workspace`] - the set of workspace folders a file can belong to
//! * Separator-string path helpers (`join`, `relative`, `directory_path`, ...)
//! * Upward marker-file search with a tagged result
//!
//! Paths are handled as strings joined with the platform separator. The
//! "directory already present" and "strip source directory" checks are plain
//! substring operations on purpose; see [`is_companion_dir_present`].
//!
//! # Example
//!
//! ```rust,ignore
//! use filegen_paths::{SourceFile, Workspace};
//!
//! let workspace = Workspace::new(["/workspace"]);
//! let source = SourceFile::new("/workspace/src/components/Button.ts")?;
//! assert_eq!(source.name_without_extension(), "Button");
//! assert_eq!(workspace.root_for_file(source.absolute_path()), Some("/workspace"));
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod find_upwards;
mod path_utils;
mod source_file;
mod workspace;

pub use error::PathError;
pub use find_upwards::{UpwardSearch, find_file_dir_upwards};
pub use path_utils::{
    SEPARATOR, SEPARATOR_STR, basename, directory_path, is_absolute, is_companion_dir_present,
    join, last_segment, normalize, relative, replace_source_dir, to_forward_slashes,
};
pub use source_file::SourceFile;
pub use workspace::{Workspace, WorkspaceFolder};
