//! In-memory interaction doubles for tests.

use std::collections::VecDeque;

use filegen_config::PromptItem;

use crate::error::OperationError;
use crate::ui::{TerminalHost, TerminalId, Ui};

/// Records everything shown and answers picks from a queue.
#[derive(Debug, Default)]
pub struct RecordingUi {
    pub answers: VecDeque<Option<usize>>,
    pub picks: Vec<Vec<String>>,
    pub opened: Vec<String>,
    pub infos: Vec<String>,
    pub errors: Vec<String>,
}

impl RecordingUi {
    pub fn with_picks(answers: impl IntoIterator<Item = Option<usize>>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Default::default()
        }
    }
}

impl Ui for RecordingUi {
    fn pick(&mut self, _title: &str, items: &[PromptItem]) -> Option<usize> {
        self.picks
            .push(items.iter().map(|i| i.label.clone()).collect());
        self.answers.pop_front().flatten()
    }

    fn open_file(&mut self, path: &str) {
        self.opened.push(path.to_string());
    }

    fn show_info(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

/// Records created terminals and the text sent to them.
#[derive(Debug, Default)]
pub struct FakeTerminalHost {
    pub created: Vec<(String, Option<String>)>,
    pub sent: Vec<(TerminalId, String)>,
}

impl TerminalHost for FakeTerminalHost {
    fn create_terminal(
        &mut self,
        name: &str,
        cwd: Option<&str>,
    ) -> Result<TerminalId, OperationError> {
        self.created
            .push((name.to_string(), cwd.map(ToString::to_string)));
        Ok(TerminalId(self.created.len() - 1))
    }

    fn send_text(&mut self, terminal: TerminalId, text: &str) -> Result<(), OperationError> {
        self.sent.push((terminal, text.to_string()));
        Ok(())
    }
}
