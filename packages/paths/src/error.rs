//! Error types for the path model.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building a path model.
#[derive(Debug, Error)]
pub enum PathError {
    /// A source file path was empty.
    #[error("File path must not be empty")]
    EmptyPath,

    /// A path could not be represented as UTF-8.
    #[error("Path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),
}
