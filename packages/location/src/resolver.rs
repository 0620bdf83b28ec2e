//! The location resolver and its result.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use filegen_config::Configuration;
use filegen_paths::{SourceFile, Workspace};
use filegen_variables::VariableResolver;

/// Where a companion file goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLocation {
    /// Base directory relative paths are measured from.
    pub base_directory: String,
    /// Directory the companion file is created in.
    pub directory: String,
    /// Companion file name.
    pub file_name: String,
    /// Full path of the companion file.
    pub absolute_path: String,
    /// Whether the source already is a companion file.
    pub is_companion: bool,
}

/// Computes base directories and companion file locations for one
/// configuration.
///
/// Every method is a pure computation on paths, except that the base
/// directory may search the filesystem upward for a root marker. Nothing is
/// created on disk.
#[derive(Debug, Clone, Copy)]
pub struct LocationResolver<'a> {
    pub(crate) config: &'a Configuration,
    pub(crate) variables: &'a VariableResolver<'a>,
}

impl<'a> LocationResolver<'a> {
    /// Create a resolver for `config`.
    #[must_use]
    pub const fn new(config: &'a Configuration, variables: &'a VariableResolver<'a>) -> Self {
        Self { config, variables }
    }

    /// The configuration this resolver applies.
    #[must_use]
    pub const fn config(&self) -> &'a Configuration {
        self.config
    }

    /// The variable resolver used for templated names.
    #[must_use]
    pub const fn variables(&self) -> &'a VariableResolver<'a> {
        self.variables
    }

    pub(crate) const fn workspace(&self) -> &'a Workspace {
        self.variables.workspace()
    }

    /// Resolve the full target location for `source`.
    #[must_use]
    pub fn resolve(&self, source: &SourceFile) -> TargetLocation {
        let target = TargetLocation {
            base_directory: self.base_directory(source),
            directory: self.files_directory(source),
            file_name: self.file_name(source),
            absolute_path: self.absolute_path(source),
            is_companion: self.is_companion_file(source),
        };

        log::debug!(
            "Resolved companion of {} to {}",
            source.absolute_path(),
            target.absolute_path
        );

        target
    }
}
