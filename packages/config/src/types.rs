//! Raw settings records as they appear in a settings file.
//!
//! Every optional setting is an `Option` here; defaults are applied when a
//! [`Configuration`](crate::Configuration) is built.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where companion files are placed when no custom location is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefaultLocation {
    /// Next to the source file.
    #[default]
    #[serde(rename = "same location as source file")]
    SameAsSourceFile,
    /// Under the project root, mirroring the source directory structure.
    #[serde(rename = "project root")]
    ProjectRoot,
    /// Next to the source file, inside a new directory.
    #[serde(rename = "same location as source file with new directory")]
    SameAsSourceFileWithNewDirectory,
}

/// How the companion file suffix is combined with the source file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileSuffixType {
    /// `Button.ts` + `.test` -> `Button.test.ts`
    #[serde(rename = "append to file name")]
    AppendToFileName,
    /// `Button.ts` + `test` -> `Button.test.ts`
    #[serde(rename = "extend extension")]
    ExtendExtension,
    /// `Button.ts` + `spec.js` -> `Button.spec.js`
    #[serde(rename = "replace extension")]
    ReplaceExtension,
}

/// How terminal sessions are reused between runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminalInstanceType {
    /// A fresh terminal for every run.
    New,
    /// One terminal per distinct command string.
    Command,
    /// One terminal per trigger argument (the task label in normal use).
    #[default]
    Label,
}

/// A single choice offered to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptItem {
    /// Text passed to the command when chosen.
    pub label: String,
    /// Optional explanation shown next to the label.
    #[serde(default)]
    pub description: String,
}

/// Interactive argument prompts for a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserInputPrompt {
    /// One prompt per inner list.
    Grouped(Vec<Vec<PromptItem>>),
    /// A single prompt.
    Flat(Vec<PromptItem>),
}

impl UserInputPrompt {
    /// The prompt groups, a flat list being a single group.
    ///
    /// Empty groups are dropped.
    #[must_use]
    pub fn groups(&self) -> Vec<&[PromptItem]> {
        match self {
            Self::Grouped(groups) => groups
                .iter()
                .filter(|g| !g.is_empty())
                .map(Vec::as_slice)
                .collect(),
            Self::Flat(items) if items.is_empty() => Vec::new(),
            Self::Flat(items) => vec![items.as_slice()],
        }
    }
}

/// File content template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Template {
    /// Lines of a single template.
    Lines(Vec<String>),
    /// Named templates the user chooses between.
    Named(BTreeMap<String, Vec<String>>),
}

/// A task as written in the settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDefinition {
    /// Label, unique within its configuration.
    #[serde(default)]
    pub label: String,

    /// Human-readable description.
    #[serde(default)]
    pub description: String,

    /// Command template.
    #[serde(default)]
    pub command: String,

    /// Argument templates appended to the command.
    #[serde(default)]
    pub args: Vec<String>,

    /// Whether this task runs when none is picked explicitly.
    #[serde(default, rename = "default")]
    pub is_default: bool,

    /// Replace backslashes with forward slashes in the final command.
    pub use_forward_slash: Option<bool>,

    /// Open the companion file before running the task.
    pub should_switch_to_file: Option<bool>,

    /// Run the task right after the companion file is created.
    pub run_task_on_file_creation: Option<bool>,

    /// Terminal reuse policy.
    pub terminal_instance_type: Option<TerminalInstanceType>,

    /// Argument prefixes whose `=value` path must exist on disk.
    #[serde(default)]
    pub check_if_arg_path_exist: Vec<String>,

    /// Report arguments dropped by the path check.
    #[serde(default)]
    pub show_message_if_path_not_exist: bool,

    /// Interactive argument prompts.
    pub user_input_prompt: Option<UserInputPrompt>,

    /// Start the terminal in the directory of the file being worked on.
    #[serde(default)]
    pub should_switch_terminal_to_cwd: bool,
}

/// A configuration as written in the settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigEntry {
    /// Label shown when picking a configuration.
    #[serde(default)]
    pub label: String,

    /// Human-readable description.
    #[serde(default)]
    pub description: String,

    /// Placement strategy when no custom location is set.
    pub default_location_for_files: Option<DefaultLocation>,

    /// Companion subdirectory name (e.g. `__tests__`).
    pub directory_name: Option<String>,

    /// Suffix appended to a root directory name.
    pub directory_suffix: Option<String>,

    /// Absolute or base-relative override location.
    pub custom_files_location: Option<String>,

    /// Conventional source directory stripped when mirroring.
    pub source_dir: Option<String>,

    /// Marker file used to find the project root.
    pub root_filename_or_extension: Option<String>,

    /// Templated name for the renamed root directory.
    pub root_dir_name: Option<String>,

    /// Companion file suffix.
    pub files_suffix: Option<String>,

    /// How the suffix is applied.
    pub file_suffix_type: Option<FileSuffixType>,

    /// Source extensions this configuration accepts.
    #[serde(default)]
    pub supported_extension: Vec<String>,

    /// Open the companion file after creating it.
    pub should_switch_to_file: Option<bool>,

    /// Do not mirror intermediate directories under a custom location.
    pub ignore_directories: Option<bool>,

    /// Tasks runnable against the companion file.
    #[serde(default)]
    pub tasks: Vec<TaskDefinition>,

    /// Content template for new files.
    pub template: Option<Template>,
}

/// Configurations loaded from a settings file.
#[derive(Debug, Clone)]
pub struct LoadedSettings {
    /// The configuration records, in file order.
    pub configs: Vec<ConfigEntry>,
    /// Absolute path to the settings file.
    pub settings_path: PathBuf,
}
