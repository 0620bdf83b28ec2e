//! filegen CLI entry point.
//!
//! Creates companion files (tests, specs, stories) next to or mirrored from
//! a source file and runs configured tasks against them.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod args;
mod interactive;
mod output;
mod terminal;

use std::env;
use std::path::{Path, PathBuf};

use clap::Parser;

use args::Args;
use filegen_config::{discover_settings, load_settings, settings_display_name, user_settings_path};
use filegen_operations::{Invocation, OperationResult, RunOutcome, TaskRunner, preview};
use filegen_paths::Workspace;
use interactive::DialoguerUi;
use terminal::ShellTerminalHost;

fn main() {
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        // SAFETY: We're setting this before any other threads are spawned
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    pretty_env_logger::init();

    if let Err(e) = run(&args) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Main application logic.
fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = env::current_dir()?;

    let Some(settings_path) = discover_settings(args.settings.as_deref(), &cwd) else {
        println!("No filegen.toml, filegen.json or .vscode/settings.json found.");
        println!("Add a 'fileGenTaskRunner.configs' entry to one of them to get started.");
        return Ok(());
    };

    let settings = load_settings(&settings_path)?;

    let workspace_dirs = if args.workspaces.is_empty() {
        vec![workspace_root(&settings_path, &cwd)]
    } else {
        args.absolute_workspaces(&cwd)
    };
    let workspace = Workspace::new(workspace_dirs.iter().map(|d| d.to_string_lossy()));

    output::print_settings_info(&settings_display_name(&settings_path, &cwd));

    if args.list {
        output::print_config_list(&settings.configs);
        return Ok(());
    }

    let invocation = Invocation {
        file: args
            .absolute_file(&cwd)
            .map(|f| f.to_string_lossy().into_owned()),
        label: args.label.clone(),
    };

    let mut ui = DialoguerUi::new(!args.non_interactive);

    if args.dry_run {
        let preview = preview(&mut ui, &settings.configs, &workspace, &invocation)?;
        let result = if preview.plan.will_skip {
            OperationResult::Exists
        } else {
            OperationResult::Created
        };

        println!("Configuration: {}", preview.configuration_label);
        output::print_result(&preview.plan.target.absolute_path, &result.to_string());
        output::print_content(&preview.plan.content);
        if let Some(command) = &preview.command {
            output::print_command("dry-run", command);
        }
        return Ok(());
    }

    let mut runner = TaskRunner::new(ShellTerminalHost::new());
    let outcome = runner.run(&mut ui, &settings.configs, &workspace, &invocation);
    runner.shutdown();

    match outcome? {
        RunOutcome::Aborted(_) => std::process::exit(1),
        RunOutcome::Completed {
            target_path,
            created,
            command,
        } => {
            log::debug!("Completed {target_path} (created: {created}, command: {command:?})");
        }
    }

    Ok(())
}

/// The workspace folder implied by a settings file.
///
/// `.vscode/settings.json` belongs to the folder above `.vscode`; the
/// user-level settings file implies the working directory.
fn workspace_root(settings_path: &Path, cwd: &Path) -> PathBuf {
    if user_settings_path().is_some_and(|user| user == settings_path) {
        return cwd.to_path_buf();
    }

    let Some(parent) = settings_path.parent() else {
        return cwd.to_path_buf();
    };

    if parent.file_name().is_some_and(|name| name == ".vscode") {
        parent.parent().unwrap_or(parent).to_path_buf()
    } else {
        parent.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_root_for_vscode_settings() {
        assert_eq!(
            workspace_root(Path::new("/repo/.vscode/settings.json"), Path::new("/elsewhere")),
            PathBuf::from("/repo")
        );
    }

    #[test]
    fn test_workspace_root_for_project_settings() {
        assert_eq!(
            workspace_root(Path::new("/repo/filegen.toml"), Path::new("/repo/src")),
            PathBuf::from("/repo")
        );
    }
}
