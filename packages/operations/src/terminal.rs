//! Terminal session reuse.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::HashMap;

use filegen_config::TerminalInstanceType;

use crate::ui::TerminalId;

/// The identity a terminal is reused under.
///
/// `new` terminals are never reused, so they have no key. `command`
/// terminals are keyed by the command text and `label` terminals by the raw
/// trigger argument.
#[must_use]
pub fn terminal_key(
    instance_type: TerminalInstanceType,
    command: &str,
    trigger: &str,
) -> Option<String> {
    match instance_type {
        TerminalInstanceType::New => None,
        TerminalInstanceType::Command => Some(command.to_string()),
        TerminalInstanceType::Label => Some(trigger.to_string()),
    }
}

/// Live terminals by identity key.
///
/// Outlives a single run. Cleared wholesale when any managed terminal
/// closes and on shutdown.
#[derive(Debug, Default)]
pub struct TerminalRegistry {
    terminals: HashMap<String, TerminalId>,
}

impl TerminalRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The terminal registered under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<TerminalId> {
        self.terminals.get(key).copied()
    }

    /// Register `terminal` under `key`.
    pub fn insert(&mut self, key: String, terminal: TerminalId) {
        self.terminals.insert(key, terminal);
    }

    /// Forget every terminal.
    pub fn clear(&mut self) {
        log::debug!("Clearing {} registered terminal(s)", self.terminals.len());
        self.terminals.clear();
    }

    /// Number of registered terminals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terminals.len()
    }

    /// Whether no terminal is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terminals.is_empty()
    }
}
