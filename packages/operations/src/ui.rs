//! Interaction seams: user prompts and terminal sessions.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use filegen_config::PromptItem;

use crate::error::OperationError;

/// What the run needs from the user interface.
pub trait Ui {
    /// Present `items` and return the index of the chosen one.
    ///
    /// `None` means the user cancelled.
    fn pick(&mut self, title: &str, items: &[PromptItem]) -> Option<usize>;

    /// Bring `path` to the user's attention.
    fn open_file(&mut self, path: &str);

    /// Show an informational message.
    fn show_info(&mut self, message: &str);

    /// Show an error message.
    fn show_error(&mut self, message: &str);
}

/// Identifier of a terminal session created by a [`TerminalHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TerminalId(pub usize);

/// Something that can create named shell sessions and send lines to them.
pub trait TerminalHost {
    /// Create a session named `name`, starting in `cwd` when given.
    ///
    /// # Errors
    ///
    /// * If the session cannot be created
    fn create_terminal(&mut self, name: &str, cwd: Option<&str>)
    -> Result<TerminalId, OperationError>;

    /// Send one line of text to a session.
    ///
    /// # Errors
    ///
    /// * If the session is gone or the text cannot be delivered
    fn send_text(&mut self, terminal: TerminalId, text: &str) -> Result<(), OperationError>;
}

/// Build prompt items from labels, without descriptions.
#[must_use]
pub fn items_from_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<PromptItem> {
    labels
        .into_iter()
        .map(|label| PromptItem {
            label: label.to_string(),
            description: String::new(),
        })
        .collect()
}
