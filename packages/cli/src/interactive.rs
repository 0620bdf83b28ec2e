//! Interactive prompts using dialoguer.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use dialoguer::Select;
use filegen_config::PromptItem;
use filegen_operations::Ui;

use crate::output;

/// Terminal user interface backed by dialoguer.
///
/// Without an attended terminal no prompt is shown: a single item is
/// chosen automatically and anything else counts as cancelled.
#[derive(Debug)]
pub struct DialoguerUi {
    interactive: bool,
}

impl DialoguerUi {
    /// Create a UI; prompts are only shown when `interactive` is set and a
    /// user is attending the terminal.
    #[must_use]
    pub fn new(interactive: bool) -> Self {
        Self {
            interactive: interactive && console::user_attended(),
        }
    }
}

impl Ui for DialoguerUi {
    fn pick(&mut self, title: &str, items: &[PromptItem]) -> Option<usize> {
        if !self.interactive {
            return auto_pick(items);
        }

        let labels: Vec<String> = items.iter().map(display_item).collect();

        match Select::new()
            .with_prompt(title)
            .items(&labels)
            .default(0)
            .interact_opt()
        {
            Ok(choice) => choice,
            Err(e) => {
                log::warn!("Prompt '{title}' failed: {e}");
                None
            }
        }
    }

    fn open_file(&mut self, path: &str) {
        output::print_file(path);
    }

    fn show_info(&mut self, message: &str) {
        output::print_info(message);
    }

    fn show_error(&mut self, message: &str) {
        output::print_error(message);
    }
}

const fn auto_pick(items: &[PromptItem]) -> Option<usize> {
    if items.len() == 1 { Some(0) } else { None }
}

fn display_item(item: &PromptItem) -> String {
    if item.description.is_empty() {
        item.label.clone()
    } else {
        format!("{} {}", item.label, item.description)
    }
}
