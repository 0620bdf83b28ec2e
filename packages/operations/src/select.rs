//! Configuration and task selection.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use filegen_config::{ConfigEntry, ConfigError, Configuration, PromptItem, find_config_by_label};

use crate::ui::Ui;

/// Select a configuration and task.
///
/// With a label, the configuration labelled so wins, otherwise the one
/// owning a task with that label; the labelled task is selected. Without a
/// label the user picks a configuration and then a task: no tasks selects
/// none, a single task is selected automatically.
///
/// # Errors
///
/// * If there are no configurations
/// * If no configuration matches the label or the user cancels
pub fn select_configuration(
    ui: &mut dyn Ui,
    configs: &[ConfigEntry],
    label: Option<&str>,
) -> Result<Configuration, ConfigError> {
    if configs.is_empty() {
        return Err(ConfigError::NoConfigurations);
    }

    if let Some(label) = label {
        let entry = find_config_by_label(configs, label).ok_or(ConfigError::ConfigurationNotFound)?;
        log::debug!("Label '{label}' selected configuration '{}'", entry.label);
        return Ok(Configuration::new(entry, Some(label)));
    }

    let items: Vec<PromptItem> = configs
        .iter()
        .map(|c| PromptItem {
            label: c.label.clone(),
            description: c.description.clone(),
        })
        .collect();

    let entry = ui
        .pick("Select a configuration", &items)
        .and_then(|index| configs.get(index))
        .ok_or(ConfigError::ConfigurationNotFound)?;

    let task_label = pick_task(ui, entry);

    Ok(Configuration::new(entry, task_label.as_deref()))
}

fn pick_task(ui: &mut dyn Ui, entry: &ConfigEntry) -> Option<String> {
    match entry.tasks.as_slice() {
        [] => None,
        [only] => Some(only.label.clone()),
        tasks => {
            let items: Vec<PromptItem> = tasks
                .iter()
                .map(|t| PromptItem {
                    label: t.label.clone(),
                    description: t.description.clone(),
                })
                .collect();

            ui.pick("Select a task", &items)
                .and_then(|index| tasks.get(index))
                .map(|t| t.label.clone())
        }
    }
}
