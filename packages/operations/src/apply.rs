//! Creation plan application.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::OperationResult;
use crate::error::OperationError;
use crate::plan::CreationPlan;

/// Create the planned companion file.
///
/// The target directory is created recursively if absent. The file itself is
/// created exclusively, so an existing file is never overwritten.
///
/// # Errors
///
/// * If the target file already exists
/// * If the directory or file cannot be created or written
pub fn apply_creation(plan: &CreationPlan) -> Result<OperationResult, OperationError> {
    let directory = Path::new(&plan.target.directory);
    let path = PathBuf::from(&plan.target.absolute_path);

    if !directory.exists() {
        log::info!("Creating directory {}", directory.display());
        fs::create_dir_all(directory).map_err(|e| OperationError::IoError {
            path: directory.to_path_buf(),
            source: e,
        })?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|e| {
            if e.kind() == ErrorKind::AlreadyExists {
                OperationError::FileAlreadyExists {
                    relative_path: plan.display_path.clone(),
                    path: path.clone(),
                }
            } else {
                OperationError::IoError {
                    path: path.clone(),
                    source: e,
                }
            }
        })?;

    file.write_all(plan.content.as_bytes())
        .map_err(|e| OperationError::IoError {
            path: path.clone(),
            source: e,
        })?;

    log::info!("Created {}", path.display());

    Ok(OperationResult::Created)
}
