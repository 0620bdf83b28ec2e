//! Task command construction.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use filegen_config::{PromptItem, Task};
use filegen_location::LocationResolver;
use filegen_paths::{SourceFile, is_absolute, join, to_forward_slashes};
use filegen_variables::VariableResolver;

use crate::messages::{NONE_DESCRIPTION, NONE_LABEL, unable_to_locate};
use crate::ui::Ui;

/// Build the shell command for the selected task.
///
/// Returns `None` when no task is selected. Otherwise:
///
/// 1. each prompt group is offered with a leading "none" option, and the
///    chosen label is appended to the arguments
/// 2. arguments whose prefix is listed in `checkIfArgPathExist` are kept
///    only if the path after `=` exists
/// 3. the command and arguments are joined with spaces, resolved against
///    `source`, then resolved again against `target` with the source's base
///    directory as root
/// 4. backslashes become forward slashes when the task asks for it
pub fn build_command(
    ui: &mut dyn Ui,
    resolver: &LocationResolver<'_>,
    source: &SourceFile,
    target: &SourceFile,
) -> Option<String> {
    let task = resolver.config().task()?;
    let variables = resolver.variables();

    let mut args = task.args.clone();
    args.extend(prompt_arguments(ui, task));

    let filtered = filter_existing_path_args(ui, task, variables, source, args);

    let mut parts = Vec::with_capacity(filtered.len() + 1);
    parts.push(task.command.clone());
    parts.extend(filtered);

    let command = variables.resolve_canonical(source.absolute_path(), &parts.join(" "));
    let command = variables.resolve(
        target.absolute_path(),
        &command,
        &resolver.base_directory(source),
    );

    let command = if task.use_forward_slash {
        to_forward_slashes(&command)
    } else {
        command
    };

    log::debug!("Built command for task '{}': {command}", task.label);

    Some(command)
}

/// Ask every prompt group and collect the chosen labels.
fn prompt_arguments(ui: &mut dyn Ui, task: &Task) -> Vec<String> {
    let mut chosen = Vec::new();

    for group in task.prompt_groups() {
        let mut items = Vec::with_capacity(group.len() + 1);
        items.push(PromptItem {
            label: NONE_LABEL.to_string(),
            description: NONE_DESCRIPTION.to_string(),
        });
        items.extend_from_slice(group);

        // Index 0 is the "none" option.
        if let Some(index) = ui.pick(&task.label, &items).filter(|&i| i > 0) {
            if let Some(item) = items.get(index) {
                chosen.push(item.label.clone());
            }
        }
    }

    chosen
}

/// Drop checked arguments whose path does not exist.
///
/// A checked argument without `=` has no path and is dropped. Relative
/// paths are looked up from the workspace folder of `source`.
fn filter_existing_path_args(
    ui: &mut dyn Ui,
    task: &Task,
    variables: &VariableResolver<'_>,
    source: &SourceFile,
    args: Vec<String>,
) -> Vec<String> {
    if task.check_if_arg_path_exist.is_empty() {
        return args;
    }

    let workspace_root = variables
        .workspace()
        .root_for_file(source.absolute_path())
        .or_else(|| variables.workspace().default_folder().map(|f| f.path.as_str()))
        .unwrap_or_default()
        .to_string();

    args.into_iter()
        .filter(|arg| {
            let checked = task
                .check_if_arg_path_exist
                .iter()
                .any(|prefix| arg.trim().starts_with(prefix.as_str()));
            if !checked {
                return true;
            }

            let exists = arg.split_once('=').is_some_and(|(_, value)| {
                let resolved = variables.resolve_canonical(source.absolute_path(), value);
                let resolved = if is_absolute(&resolved) {
                    resolved
                } else {
                    join(&[&workspace_root, &resolved])
                };
                Path::new(&resolved).exists()
            });

            if !exists {
                log::warn!("Dropping argument {arg}: path not found");
                if task.show_message_if_path_not_exist {
                    ui.show_error(&unable_to_locate(arg));
                }
            }

            exists
        })
        .collect()
}
