//! Immutable configuration view with every default applied.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use crate::types::{
    ConfigEntry, DefaultLocation, FileSuffixType, PromptItem, TaskDefinition, Template,
    TerminalInstanceType, UserInputPrompt,
};

/// Source directory stripped when mirroring, unless configured otherwise.
pub const DEFAULT_SOURCE_DIR: &str = "src";

/// A task with its defaults filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Label, unique within its configuration.
    pub label: String,
    /// Human-readable description.
    pub description: String,
    /// Command template.
    pub command: String,
    /// Argument templates.
    pub args: Vec<String>,
    /// Whether the task is the configuration's default.
    pub is_default: bool,
    /// Replace backslashes with forward slashes in the final command.
    pub use_forward_slash: bool,
    /// Open the companion file before running.
    pub should_switch_to_file: bool,
    /// Run right after the companion file is created.
    pub run_task_on_file_creation: bool,
    /// Terminal reuse policy.
    pub terminal_instance_type: TerminalInstanceType,
    /// Argument prefixes whose path value must exist.
    pub check_if_arg_path_exist: Vec<String>,
    /// Report arguments dropped by the path check.
    pub show_message_if_path_not_exist: bool,
    /// Interactive argument prompts.
    pub user_input_prompt: Option<UserInputPrompt>,
    /// Start the terminal in the working file's directory.
    pub should_switch_terminal_to_cwd: bool,
}

impl Task {
    /// Prompt groups to present, in order.
    #[must_use]
    pub fn prompt_groups(&self) -> Vec<&[PromptItem]> {
        self.user_input_prompt
            .as_ref()
            .map(UserInputPrompt::groups)
            .unwrap_or_default()
    }
}

impl From<&TaskDefinition> for Task {
    fn from(definition: &TaskDefinition) -> Self {
        Self {
            label: definition.label.clone(),
            description: definition.description.clone(),
            command: definition.command.clone(),
            args: definition.args.clone(),
            is_default: definition.is_default,
            use_forward_slash: definition.use_forward_slash.unwrap_or(true),
            should_switch_to_file: definition.should_switch_to_file.unwrap_or(true),
            run_task_on_file_creation: definition.run_task_on_file_creation.unwrap_or(true),
            terminal_instance_type: definition.terminal_instance_type.unwrap_or_default(),
            check_if_arg_path_exist: definition.check_if_arg_path_exist.clone(),
            show_message_if_path_not_exist: definition.show_message_if_path_not_exist,
            user_input_prompt: definition.user_input_prompt.clone(),
            should_switch_terminal_to_cwd: definition.should_switch_terminal_to_cwd,
        }
    }
}

/// A configuration record merged with defaults, plus the selected task.
///
/// Built once per invocation. Scalar accessors always return a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    label: String,
    description: String,
    default_location: DefaultLocation,
    directory_name: String,
    directory_suffix: String,
    custom_files_location: String,
    source_dir: String,
    root_filename_or_extension: String,
    root_dir_name: Option<String>,
    files_suffix: String,
    file_suffix_type: Option<FileSuffixType>,
    supported_extensions: Vec<String>,
    should_switch_to_file: bool,
    ignore_directories: bool,
    tasks: Vec<Task>,
    template: Option<Template>,
    task: Option<Task>,
}

impl Configuration {
    /// Build a configuration from a settings record.
    ///
    /// The selected task is the one labelled `task_label`; when there is no
    /// such task, the task flagged `default` is used instead.
    #[must_use]
    pub fn new(entry: &ConfigEntry, task_label: Option<&str>) -> Self {
        let tasks: Vec<Task> = entry.tasks.iter().map(Task::from).collect();

        let task = task_label
            .filter(|label| !label.is_empty())
            .and_then(|label| tasks.iter().find(|t| t.label == label))
            .or_else(|| tasks.iter().find(|t| t.is_default))
            .cloned();

        log::debug!(
            "Configuration '{}' selected task {:?}",
            entry.label,
            task.as_ref().map(|t| t.label.as_str())
        );

        Self {
            label: entry.label.clone(),
            description: entry.description.clone(),
            default_location: entry.default_location_for_files.unwrap_or_default(),
            directory_name: entry.directory_name.clone().unwrap_or_default(),
            directory_suffix: entry.directory_suffix.clone().unwrap_or_default(),
            custom_files_location: entry.custom_files_location.clone().unwrap_or_default(),
            source_dir: entry
                .source_dir
                .clone()
                .unwrap_or_else(|| DEFAULT_SOURCE_DIR.to_string()),
            root_filename_or_extension: entry
                .root_filename_or_extension
                .clone()
                .unwrap_or_default(),
            root_dir_name: entry.root_dir_name.clone(),
            files_suffix: entry.files_suffix.clone().unwrap_or_default(),
            file_suffix_type: entry.file_suffix_type,
            supported_extensions: entry.supported_extension.clone(),
            should_switch_to_file: entry.should_switch_to_file.unwrap_or(true),
            ignore_directories: entry.ignore_directories.unwrap_or(false),
            tasks,
            template: entry.template.clone(),
            task,
        }
    }

    /// Configuration label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Configuration description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Placement strategy when no custom location is set.
    #[must_use]
    pub const fn default_location(&self) -> DefaultLocation {
        self.default_location
    }

    /// Whether companion files go under the project root.
    #[must_use]
    pub fn should_create_files_in_project_root(&self) -> bool {
        self.default_location == DefaultLocation::ProjectRoot
    }

    /// Companion subdirectory name; empty when there is none.
    #[must_use]
    pub fn directory_name(&self) -> &str {
        &self.directory_name
    }

    /// Suffix appended to a root directory name.
    #[must_use]
    pub fn directory_suffix(&self) -> &str {
        &self.directory_suffix
    }

    /// Whether `dir` ends with the configured directory suffix.
    ///
    /// Always true when no suffix is configured.
    #[must_use]
    pub fn ends_with_directory_suffix(&self, dir: &str) -> bool {
        dir.ends_with(&self.directory_suffix)
    }

    /// Custom location override; empty when unset.
    #[must_use]
    pub fn custom_files_location(&self) -> &str {
        &self.custom_files_location
    }

    /// Conventional source directory name.
    #[must_use]
    pub fn source_dir(&self) -> &str {
        &self.source_dir
    }

    /// Marker used to discover the project root; empty when unset.
    #[must_use]
    pub fn root_filename_or_extension(&self) -> &str {
        &self.root_filename_or_extension
    }

    /// Templated root directory name, if configured.
    #[must_use]
    pub fn root_dir_name(&self) -> Option<&str> {
        self.root_dir_name.as_deref()
    }

    /// Companion file suffix; empty when unset.
    #[must_use]
    pub fn files_suffix(&self) -> &str {
        &self.files_suffix
    }

    /// How the suffix is combined with the file name.
    #[must_use]
    pub const fn file_suffix_type(&self) -> Option<FileSuffixType> {
        self.file_suffix_type
    }

    /// Accepted source extensions.
    #[must_use]
    pub fn supported_extensions(&self) -> &[String] {
        &self.supported_extensions
    }

    /// Whether `extension` is one of the supported extensions.
    #[must_use]
    pub fn is_supported_extension(&self, extension: &str) -> bool {
        self.supported_extensions.iter().any(|e| e == extension)
    }

    /// Open the companion file after creating it.
    #[must_use]
    pub const fn should_switch_to_file(&self) -> bool {
        self.should_switch_to_file
    }

    /// Do not mirror intermediate directories under a custom location.
    #[must_use]
    pub const fn ignore_directories(&self) -> bool {
        self.ignore_directories
    }

    /// All tasks of the configuration.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Content template, if configured.
    #[must_use]
    pub const fn template(&self) -> Option<&Template> {
        self.template.as_ref()
    }

    /// The selected task, if any.
    #[must_use]
    pub const fn task(&self) -> Option<&Task> {
        self.task.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_with_tasks() -> ConfigEntry {
        ConfigEntry {
            label: "jest".to_string(),
            tasks: vec![
                TaskDefinition {
                    label: "run".to_string(),
                    command: "jest".to_string(),
                    ..Default::default()
                },
                TaskDefinition {
                    label: "watch".to_string(),
                    command: "jest --watch".to_string(),
                    is_default: true,
                    use_forward_slash: Some(false),
                    terminal_instance_type: Some(TerminalInstanceType::Command),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_are_applied() {
        let config = Configuration::new(&ConfigEntry::default(), None);

        assert_eq!(config.default_location(), DefaultLocation::SameAsSourceFile);
        assert_eq!(config.directory_name(), "");
        assert_eq!(config.directory_suffix(), "");
        assert_eq!(config.custom_files_location(), "");
        assert_eq!(config.source_dir(), "src");
        assert_eq!(config.root_filename_or_extension(), "");
        assert_eq!(config.root_dir_name(), None);
        assert_eq!(config.files_suffix(), "");
        assert!(config.should_switch_to_file());
        assert!(!config.ignore_directories());
        assert!(config.supported_extensions().is_empty());
        assert!(config.task().is_none());
    }

    #[test]
    fn test_task_defaults_are_filled_at_construction() {
        let config = Configuration::new(&entry_with_tasks(), Some("run"));
        let task = config.task().unwrap();

        assert_eq!(task.label, "run");
        assert!(task.use_forward_slash);
        assert!(task.should_switch_to_file);
        assert!(task.run_task_on_file_creation);
        assert_eq!(task.terminal_instance_type, TerminalInstanceType::Label);
    }

    #[test]
    fn test_default_task_is_selected_without_label() {
        let config = Configuration::new(&entry_with_tasks(), None);
        let task = config.task().unwrap();

        assert_eq!(task.label, "watch");
        assert!(!task.use_forward_slash);
        assert_eq!(task.terminal_instance_type, TerminalInstanceType::Command);
    }

    #[test]
    fn test_unknown_label_falls_back_to_default_task() {
        let config = Configuration::new(&entry_with_tasks(), Some("missing"));

        assert_eq!(config.task().map(|t| t.label.as_str()), Some("watch"));
    }

    #[test]
    fn test_project_root_detection() {
        let entry = ConfigEntry {
            default_location_for_files: Some(DefaultLocation::ProjectRoot),
            ..Default::default()
        };

        assert!(Configuration::new(&entry, None).should_create_files_in_project_root());
    }

    #[test]
    fn test_supported_extension() {
        let entry = ConfigEntry {
            supported_extension: vec!["ts".to_string(), "tsx".to_string()],
            ..Default::default()
        };
        let config = Configuration::new(&entry, None);

        assert!(config.is_supported_extension("tsx"));
        assert!(!config.is_supported_extension("py"));
    }

    #[test]
    fn test_ends_with_directory_suffix() {
        let entry = ConfigEntry {
            directory_suffix: Some("__tests__".to_string()),
            ..Default::default()
        };
        let config = Configuration::new(&entry, None);

        assert!(config.ends_with_directory_suffix("/workspace/src/__tests__"));
        assert!(!config.ends_with_directory_suffix("/workspace/src/components"));
        assert!(
            Configuration::new(&ConfigEntry::default(), None)
                .ends_with_directory_suffix("/workspace/src/__tests__")
        );
    }

    #[test]
    fn test_flat_prompt_is_one_group() {
        let task = Task::from(&TaskDefinition {
            user_input_prompt: Some(UserInputPrompt::Flat(vec![PromptItem {
                label: "--coverage".to_string(),
                description: String::new(),
            }])),
            ..Default::default()
        });

        assert_eq!(task.prompt_groups().len(), 1);
    }
}
