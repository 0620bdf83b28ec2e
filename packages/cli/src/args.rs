//! CLI argument definitions.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use clap::Parser;
use path_clean::PathClean;

/// CLI arguments for filegen.
#[derive(Debug, Parser)]
#[command(
    name = "filegen",
    about = "Create companion files (tests, specs, stories) and run tasks against them",
    version
)]
pub struct Args {
    /// Source or companion file to work on.
    #[arg(index = 1)]
    pub file: Option<PathBuf>,

    /// Configuration or task label to run.
    #[arg(long, short = 'l')]
    pub label: Option<String>,

    /// Settings file to load instead of discovering one.
    #[arg(long, short = 's')]
    pub settings: Option<PathBuf>,

    /// Workspace folder (can be specified multiple times).
    #[arg(long = "workspace", short = 'w')]
    pub workspaces: Vec<PathBuf>,

    /// List configurations and their tasks and exit.
    #[arg(long)]
    pub list: bool,

    /// Print what would be created and run without doing it.
    #[arg(long)]
    pub dry_run: bool,

    /// Run without prompts.
    #[arg(long)]
    pub non_interactive: bool,

    /// Enable verbose output.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Args {
    /// The file argument as an absolute, cleaned path.
    #[must_use]
    pub fn absolute_file(&self, cwd: &Path) -> Option<PathBuf> {
        self.file.as_ref().map(|file| absolutize(file, cwd))
    }

    /// Workspace folders as absolute, cleaned paths.
    #[must_use]
    pub fn absolute_workspaces(&self, cwd: &Path) -> Vec<PathBuf> {
        self.workspaces
            .iter()
            .map(|dir| absolutize(dir, cwd))
            .collect()
    }
}

fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf().clean()
    } else {
        cwd.join(path).clean()
    }
}
