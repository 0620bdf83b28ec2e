//! Run orchestration: select, validate, create, then run the task.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use filegen_config::{ConfigEntry, Configuration, TerminalInstanceType};
use filegen_location::LocationResolver;
use filegen_paths::{SourceFile, Workspace};
use filegen_variables::VariableResolver;

use crate::apply::apply_creation;
use crate::command::build_command;
use crate::error::OperationError;
use crate::messages::FILE_CREATED;
use crate::plan::{CreationPlan, choose_template, plan_creation};
use crate::select::select_configuration;
use crate::terminal::{TerminalRegistry, terminal_key};
use crate::ui::{TerminalHost, Ui};

/// What triggered a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// The file to work on; the first workspace folder is used when absent.
    pub file: Option<String>,
    /// Configuration or task label selecting what to run.
    pub label: Option<String>,
}

impl Invocation {
    /// The raw trigger argument: the label if given, else the file path.
    #[must_use]
    pub fn trigger(&self) -> &str {
        self.label
            .as_deref()
            .or(self.file.as_deref())
            .unwrap_or_default()
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The run stopped after showing this message.
    Aborted(String),
    /// The run went through.
    Completed {
        /// Path of the companion file.
        target_path: String,
        /// Whether the companion file was created by this run.
        created: bool,
        /// The command sent to a terminal, if any.
        command: Option<String>,
    },
}

/// Everything a run would do, without doing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// Label of the selected configuration.
    pub configuration_label: String,
    /// The planned companion file.
    pub plan: CreationPlan,
    /// The command the task would run.
    pub command: Option<String>,
}

/// Runs companion file creation and tasks, reusing terminals across runs.
#[derive(Debug)]
pub struct TaskRunner<H: TerminalHost> {
    host: H,
    registry: TerminalRegistry,
}

impl<H: TerminalHost> TaskRunner<H> {
    /// Create a runner sending commands to `host`.
    pub fn new(host: H) -> Self {
        Self {
            host,
            registry: TerminalRegistry::new(),
        }
    }

    /// The terminal host.
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// The terminal registry.
    pub const fn registry(&self) -> &TerminalRegistry {
        &self.registry
    }

    /// Forget every terminal after one of them closed.
    pub fn terminal_closed(&mut self) {
        self.registry.clear();
    }

    /// Forget every terminal on teardown.
    pub fn shutdown(&mut self) {
        self.registry.clear();
    }

    /// Run one invocation.
    ///
    /// Selection and validation failures are shown through `ui` and end the
    /// run with [`RunOutcome::Aborted`]. An existing companion file is
    /// opened and reported, and the task still runs.
    ///
    /// # Errors
    ///
    /// * If the companion file cannot be written
    /// * If the terminal cannot be created or the command cannot be sent
    pub fn run(
        &mut self,
        ui: &mut dyn Ui,
        configs: &[ConfigEntry],
        workspace: &Workspace,
        invocation: &Invocation,
    ) -> Result<RunOutcome, OperationError> {
        let (configuration, source) = match prepare(ui, configs, workspace, invocation) {
            Ok(prepared) => prepared,
            Err(e) if is_user_facing(&e) => {
                let message = e.to_string();
                log::warn!("Run aborted: {message}");
                ui.show_error(&message);
                return Ok(RunOutcome::Aborted(message));
            }
            Err(e) => return Err(e),
        };

        let variables = VariableResolver::new(workspace);
        let resolver = LocationResolver::new(&configuration, &variables);
        let target_path = resolver.absolute_path(&source);

        let mut created = false;
        let mut opened = false;

        if !Path::new(&target_path).exists() {
            let lines = choose_template(ui, configuration.template());
            let plan = plan_creation(&resolver, &source, &lines);

            match apply_creation(&plan) {
                Ok(_) => {
                    created = true;
                    if configuration.should_switch_to_file() {
                        ui.open_file(&target_path);
                        opened = true;
                    }
                    ui.show_info(FILE_CREATED);
                }
                Err(e @ OperationError::FileAlreadyExists { .. }) => {
                    ui.open_file(&target_path);
                    opened = true;
                    ui.show_error(&e.to_string());
                }
                Err(e) => return Err(e),
            }
        }

        let completed = |command: Option<String>| RunOutcome::Completed {
            target_path: target_path.clone(),
            created,
            command,
        };

        let Some(task) = configuration.task() else {
            if configuration.should_switch_to_file() && !opened {
                ui.open_file(&target_path);
            }
            return Ok(completed(None));
        };

        if created && !task.run_task_on_file_creation {
            log::debug!("Not running '{}' on file creation", task.label);
            return Ok(completed(None));
        }

        let parent = resolver.parent_source(&source)?;
        let target = SourceFile::new(target_path.clone())?;

        let Some(command) = build_command(ui, &resolver, &parent, &target) else {
            return Ok(completed(None));
        };

        let cwd = task.should_switch_terminal_to_cwd.then(|| {
            if task.should_switch_to_file {
                target.directory_path()
            } else {
                parent.directory_path()
            }
        });

        if task.should_switch_to_file {
            ui.open_file(&target_path);
        }

        self.run_terminal_command(
            &command,
            task.terminal_instance_type,
            invocation.trigger(),
            &task.label,
            cwd.as_deref(),
        )?;

        Ok(completed(Some(command)))
    }

    fn run_terminal_command(
        &mut self,
        command: &str,
        instance_type: TerminalInstanceType,
        trigger: &str,
        name: &str,
        cwd: Option<&str>,
    ) -> Result<(), OperationError> {
        let terminal = match terminal_key(instance_type, command, trigger) {
            None => self.host.create_terminal(name, cwd)?,
            Some(key) => {
                if let Some(existing) = self.registry.get(&key) {
                    existing
                } else {
                    let created = self.host.create_terminal(name, cwd)?;
                    self.registry.insert(key, created);
                    created
                }
            }
        };

        log::info!("Running '{command}' in terminal '{name}'");

        self.host.send_text(terminal, command)
    }
}

/// Resolve what a run would do without creating files or running anything.
///
/// # Errors
///
/// * If selection or validation fails
pub fn preview(
    ui: &mut dyn Ui,
    configs: &[ConfigEntry],
    workspace: &Workspace,
    invocation: &Invocation,
) -> Result<Preview, OperationError> {
    let (configuration, source) = prepare(ui, configs, workspace, invocation)?;

    let variables = VariableResolver::new(workspace);
    let resolver = LocationResolver::new(&configuration, &variables);

    let lines = choose_template(ui, configuration.template());
    let plan = plan_creation(&resolver, &source, &lines);

    let parent = resolver.parent_source(&source)?;
    let target = SourceFile::new(plan.target.absolute_path.clone())?;
    let command = build_command(ui, &resolver, &parent, &target);

    Ok(Preview {
        configuration_label: configuration.label().to_string(),
        plan,
        command,
    })
}

fn prepare(
    ui: &mut dyn Ui,
    configs: &[ConfigEntry],
    workspace: &Workspace,
    invocation: &Invocation,
) -> Result<(Configuration, SourceFile), OperationError> {
    let path = invocation
        .file
        .clone()
        .or_else(|| workspace.default_folder().map(|f| f.path.clone()))
        .ok_or(OperationError::NoSourceFile)?;

    let configuration = select_configuration(ui, configs, invocation.label.as_deref())?;
    let source = SourceFile::new(path)?;

    validate_extension(&configuration, &source)?;

    Ok((configuration, source))
}

/// Check the source extension against the configuration.
///
/// # Errors
///
/// * If the extension is not supported
/// * If the extension is empty
pub fn validate_extension(
    configuration: &Configuration,
    source: &SourceFile,
) -> Result<(), OperationError> {
    let extension = source.extension();

    if !configuration.is_supported_extension(extension) {
        return Err(OperationError::UnsupportedExtension);
    }

    if extension.is_empty() {
        return Err(OperationError::InvalidExtension);
    }

    Ok(())
}

const fn is_user_facing(error: &OperationError) -> bool {
    matches!(
        error,
        OperationError::Config(_)
            | OperationError::UnsupportedExtension
            | OperationError::InvalidExtension
            | OperationError::NoSourceFile
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeTerminalHost, RecordingUi};
    use crate::ui::TerminalId;
    use filegen_config::{DefaultLocation, FileSuffixType, TaskDefinition, Template};
    use std::fs;
    use tempfile::TempDir;

    struct Fixture {
        dir: TempDir,
        workspace: Workspace,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            fs::create_dir_all(dir.path().join("src/components")).unwrap();
            fs::write(dir.path().join("src/components/Button.ts"), "export {}").unwrap();
            let workspace = Workspace::new([dir.path().to_string_lossy().as_ref()]);
            Self { dir, workspace }
        }

        fn path(&self, relative: &str) -> String {
            self.dir.path().join(relative).to_string_lossy().into_owned()
        }

        fn invocation(&self, label: Option<&str>) -> Invocation {
            Invocation {
                file: Some(self.path("src/components/Button.ts")),
                label: label.map(ToString::to_string),
            }
        }
    }

    fn jest_config(task: TaskDefinition) -> ConfigEntry {
        ConfigEntry {
            label: "jest".to_string(),
            default_location_for_files: Some(DefaultLocation::ProjectRoot),
            directory_name: Some("__tests__".to_string()),
            files_suffix: Some("test".to_string()),
            file_suffix_type: Some(FileSuffixType::ExtendExtension),
            supported_extension: vec!["ts".to_string()],
            template: Some(Template::Lines(vec![
                "import ${moduleName} from '${modulePath}';".to_string(),
            ])),
            tasks: vec![TaskDefinition {
                label: "run".to_string(),
                command: "jest ${outputFilePath}".to_string(),
                ..task
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_run_creates_file_and_runs_task() {
        let fixture = Fixture::new();
        let configs = vec![jest_config(TaskDefinition::default())];
        let mut ui = RecordingUi::default();
        let mut runner = TaskRunner::new(FakeTerminalHost::default());

        let outcome = runner
            .run(&mut ui, &configs, &fixture.workspace, &fixture.invocation(Some("run")))
            .unwrap();

        let target = fixture.path("__tests__/components/Button.test.ts");
        assert_eq!(
            outcome,
            RunOutcome::Completed {
                target_path: target.clone(),
                created: true,
                command: Some(format!("jest {target}")),
            }
        );
        assert_eq!(
            fs::read_to_string(&target).unwrap(),
            "import Button from '../../src/components/Button';"
        );
        assert_eq!(ui.infos, vec![FILE_CREATED.to_string()]);
        assert_eq!(ui.opened, vec![target.clone(), target.clone()]);
        assert_eq!(runner.host().created, vec![("run".to_string(), None)]);
        assert_eq!(runner.host().sent, vec![(TerminalId(0), format!("jest {target}"))]);
    }

    #[test]
    fn test_existing_target_is_kept_and_task_runs() {
        let fixture = Fixture::new();
        let target = fixture.path("__tests__/components/Button.test.ts");
        fs::create_dir_all(fixture.path("__tests__/components")).unwrap();
        fs::write(&target, "// mine").unwrap();

        let configs = vec![jest_config(TaskDefinition::default())];
        let mut ui = RecordingUi::default();
        let mut runner = TaskRunner::new(FakeTerminalHost::default());

        let outcome = runner
            .run(&mut ui, &configs, &fixture.workspace, &fixture.invocation(Some("run")))
            .unwrap();

        assert!(matches!(outcome, RunOutcome::Completed { created: false, .. }));
        assert_eq!(fs::read_to_string(&target).unwrap(), "// mine");
        assert!(ui.infos.is_empty());
        assert_eq!(runner.host().sent.len(), 1);
    }

    #[test]
    fn test_no_run_on_file_creation() {
        let fixture = Fixture::new();
        let configs = vec![jest_config(TaskDefinition {
            run_task_on_file_creation: Some(false),
            ..Default::default()
        })];
        let mut ui = RecordingUi::default();
        let mut runner = TaskRunner::new(FakeTerminalHost::default());

        let first = runner
            .run(&mut ui, &configs, &fixture.workspace, &fixture.invocation(Some("run")))
            .unwrap();
        let second = runner
            .run(&mut ui, &configs, &fixture.workspace, &fixture.invocation(Some("run")))
            .unwrap();

        assert!(matches!(first, RunOutcome::Completed { created: true, command: None, .. }));
        assert!(matches!(second, RunOutcome::Completed { created: false, command: Some(_), .. }));
        assert_eq!(runner.host().sent.len(), 1);
    }

    #[test]
    fn test_label_terminal_is_reused_until_closed() {
        let fixture = Fixture::new();
        let configs = vec![jest_config(TaskDefinition::default())];
        let mut ui = RecordingUi::default();
        let mut runner = TaskRunner::new(FakeTerminalHost::default());
        let invocation = fixture.invocation(Some("run"));

        for _ in 0..2 {
            runner
                .run(&mut ui, &configs, &fixture.workspace, &invocation)
                .unwrap();
        }
        assert_eq!(runner.host().created.len(), 1);
        assert_eq!(runner.registry().len(), 1);

        runner.terminal_closed();
        runner
            .run(&mut ui, &configs, &fixture.workspace, &invocation)
            .unwrap();

        assert_eq!(runner.host().created.len(), 2);
        assert_eq!(runner.host().sent[2].0, TerminalId(1));
    }

    #[test]
    fn test_new_terminal_every_run() {
        let fixture = Fixture::new();
        let configs = vec![jest_config(TaskDefinition {
            terminal_instance_type: Some(TerminalInstanceType::New),
            ..Default::default()
        })];
        let mut ui = RecordingUi::default();
        let mut runner = TaskRunner::new(FakeTerminalHost::default());
        let invocation = fixture.invocation(Some("run"));

        for _ in 0..2 {
            runner
                .run(&mut ui, &configs, &fixture.workspace, &invocation)
                .unwrap();
        }

        assert_eq!(runner.host().created.len(), 2);
        assert!(runner.registry().is_empty());
    }

    #[test]
    fn test_terminal_cwd_follows_task() {
        let fixture = Fixture::new();
        let configs = vec![jest_config(TaskDefinition {
            should_switch_terminal_to_cwd: true,
            should_switch_to_file: Some(false),
            ..Default::default()
        })];
        let mut ui = RecordingUi::default();
        let mut runner = TaskRunner::new(FakeTerminalHost::default());

        runner
            .run(&mut ui, &configs, &fixture.workspace, &fixture.invocation(Some("run")))
            .unwrap();

        assert_eq!(
            runner.host().created[0].1.as_deref(),
            Some(fixture.path("src/components").as_str())
        );
    }

    #[test]
    fn test_unsupported_extension_aborts() {
        let fixture = Fixture::new();
        let mut config = jest_config(TaskDefinition::default());
        config.supported_extension = vec!["js".to_string()];
        let mut ui = RecordingUi::default();
        let mut runner = TaskRunner::new(FakeTerminalHost::default());

        let outcome = runner
            .run(&mut ui, &[config], &fixture.workspace, &fixture.invocation(Some("run")))
            .unwrap();

        let message = OperationError::UnsupportedExtension.to_string();
        assert_eq!(outcome, RunOutcome::Aborted(message.clone()));
        assert_eq!(ui.errors, vec![message]);
        assert!(!Path::new(&fixture.path("__tests__")).exists());
    }

    #[test]
    fn test_missing_configurations_abort() {
        let fixture = Fixture::new();
        let mut ui = RecordingUi::default();
        let mut runner = TaskRunner::new(FakeTerminalHost::default());

        let outcome = runner
            .run(&mut ui, &[], &fixture.workspace, &fixture.invocation(None))
            .unwrap();

        assert!(matches!(outcome, RunOutcome::Aborted(_)));
        assert_eq!(
            ui.errors,
            vec![
                "Unable to get configurations, make sure to have an entry in 'fileGenTaskRunner.configs'."
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_validate_extension() {
        let config = Configuration::new(
            &ConfigEntry {
                supported_extension: vec![String::new(), "ts".to_string()],
                ..Default::default()
            },
            None,
        );

        assert!(validate_extension(&config, &SourceFile::new("/a/b.ts").unwrap()).is_ok());
        assert!(matches!(
            validate_extension(&config, &SourceFile::new("/a/b.").unwrap()),
            Err(OperationError::InvalidExtension)
        ));
        assert!(matches!(
            validate_extension(&config, &SourceFile::new("/a/b.rs").unwrap()),
            Err(OperationError::UnsupportedExtension)
        ));
    }

    #[test]
    fn test_preview_has_no_side_effects() {
        let fixture = Fixture::new();
        let configs = vec![jest_config(TaskDefinition::default())];
        let mut ui = RecordingUi::default();

        let preview = preview(
            &mut ui,
            &configs,
            &fixture.workspace,
            &fixture.invocation(Some("run")),
        )
        .unwrap();

        let target = fixture.path("__tests__/components/Button.test.ts");
        assert_eq!(preview.configuration_label, "jest");
        assert_eq!(preview.plan.target.absolute_path, target);
        assert_eq!(preview.command, Some(format!("jest {target}")));
        assert!(!Path::new(&target).exists());
    }
}
