//! Shell-backed terminal sessions.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use filegen_operations::{OperationError, TerminalHost, TerminalId};

use crate::output;

#[derive(Debug)]
struct Session {
    name: String,
    cwd: Option<PathBuf>,
}

/// Runs every line sent to a session through `sh -c`, in the session's
/// working directory, with inherited standard streams.
#[derive(Debug, Default)]
pub struct ShellTerminalHost {
    sessions: Vec<Session>,
}

impl ShellTerminalHost {
    /// Create a host with no sessions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TerminalHost for ShellTerminalHost {
    fn create_terminal(
        &mut self,
        name: &str,
        cwd: Option<&str>,
    ) -> Result<TerminalId, OperationError> {
        let cwd = cwd.map(PathBuf::from);

        if let Some(dir) = cwd.as_ref().filter(|dir| !dir.is_dir()) {
            return Err(OperationError::TerminalError {
                name: name.to_string(),
                source: io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("working directory {} does not exist", dir.display()),
                ),
            });
        }

        log::debug!("Creating terminal '{name}' (cwd: {cwd:?})");

        self.sessions.push(Session {
            name: name.to_string(),
            cwd,
        });

        Ok(TerminalId(self.sessions.len() - 1))
    }

    fn send_text(&mut self, terminal: TerminalId, text: &str) -> Result<(), OperationError> {
        let session = self
            .sessions
            .get(terminal.0)
            .ok_or_else(|| OperationError::TerminalError {
                name: format!("#{}", terminal.0),
                source: io::Error::new(io::ErrorKind::NotFound, "no such terminal"),
            })?;

        output::print_command(&session.name, text);

        let mut command = Command::new("sh");
        command
            .args(["-c", text])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = &session.cwd {
            command.current_dir(dir);
        }

        let to_error = |e| OperationError::TerminalError {
            name: session.name.clone(),
            source: e,
        };

        let status = command.spawn().map_err(to_error)?.wait().map_err(to_error)?;

        if !status.success() {
            output::print_warning(&format!("Command failed: {text}"));
        }

        Ok(())
    }
}
