//! Error types for file creation and task running.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while creating companion files and running tasks.
#[derive(Debug, Error)]
pub enum OperationError {
    /// The companion file exists already.
    #[error("File already exists at {relative_path}.")]
    FileAlreadyExists {
        /// Path of the existing file relative to the base directory.
        relative_path: String,
        /// Absolute path of the existing file.
        path: PathBuf,
    },

    /// The source extension is not in `supportedExtension`.
    #[error(
        "File extension not supported, to support the extension add an entry to 'fileGenTaskRunner.configs' and set 'supportedExtension' property."
    )]
    UnsupportedExtension,

    /// The source has no usable extension.
    #[error("Invalid file extension!")]
    InvalidExtension,

    /// There is neither a file nor a workspace folder to work on.
    #[error("No file to work on, pass a file or a workspace folder.")]
    NoSourceFile,

    /// IO error during file operation.
    #[error("IO error at {}: {source}", path.display())]
    IoError {
        /// Path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Terminal session error.
    #[error("Terminal '{name}' failed: {source}")]
    TerminalError {
        /// Terminal name.
        name: String,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Settings error.
    #[error(transparent)]
    Config(#[from] filegen_config::ConfigError),

    /// Path model error.
    #[error(transparent)]
    Path(#[from] filegen_paths::PathError),
}
