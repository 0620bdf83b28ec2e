//! Companion file operations for filegen.
//!
//! This crate drives a single run end to end:
//!
//! * Configuration and task selection
//! * Companion file planning and creation
//! * Task command construction
//! * Terminal dispatch with instance reuse
//!
//! # Example
//!
//! ```rust,ignore
//! use filegen_operations::{Invocation, TaskRunner};
//!
//! let mut runner = TaskRunner::new(host);
//! let outcome = runner.run(&mut ui, &settings.configs, &workspace, &Invocation {
//!     file: Some("/repo/src/Button.ts".to_string()),
//!     label: None,
//! })?;
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod apply;
mod command;
mod error;
mod messages;
mod plan;
mod runner;
mod select;
mod terminal;
mod ui;

#[cfg(test)]
mod test_support;

pub use apply::apply_creation;
pub use command::build_command;
pub use error::OperationError;
pub use messages::{FILE_CREATED, NONE_DESCRIPTION, NONE_LABEL};
pub use plan::{CreationPlan, choose_template, plan_creation};
pub use runner::{Invocation, Preview, RunOutcome, TaskRunner, preview, validate_extension};
pub use select::select_configuration;
pub use terminal::{TerminalRegistry, terminal_key};
pub use ui::{TerminalHost, TerminalId, Ui, items_from_labels};

/// Result of a companion file creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationResult {
    /// The file was created.
    Created,
    /// The file already existed and was left alone.
    Exists,
}

impl std::fmt::Display for OperationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Exists => write!(f, "exists"),
        }
    }
}
