//! Command execution against an editor host.
//!
//! [`Plugin`] ties configuration, keybindings and the converter together:
//! it resolves a command (by id or by key chord), fetches the target text
//! from the host, converts it and writes it back.

use crate::case_convert::{self, CaseMode};
use crate::commands::{self, CaseCommand, MenuItem};
use crate::host::{EditorHost, HostError, TextRange};
use camelsnake_config::Config;
use camelsnake_keybindings::{KeyEvent, KeybindingRegistry, ParseError};
use std::borrow::Cow;

/// Result of running a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// No focused editor or no open document.
    NoTarget,
    /// The selection was empty and whole-document conversion is disabled.
    NothingSelected,
    /// The key chord is not bound to any command.
    Unbound,
    /// `range` was converted; `changed` is false when the text had nothing to rewrite.
    Replaced { range: TextRange, changed: bool },
}

#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("invalid key chord: {0}")]
    InvalidChord(#[from] ParseError),

    #[error(transparent)]
    Host(#[from] HostError),
}

/// Configured plugin instance.
#[derive(Debug)]
pub struct Plugin {
    config: Config,
    keybindings: KeybindingRegistry,
}

impl Plugin {
    pub fn new(config: Config) -> Self {
        let keybindings = KeybindingRegistry::from_config(&config.keybindings);
        Self {
            config,
            keybindings,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn keybindings(&self) -> &KeybindingRegistry {
        &self.keybindings
    }

    pub fn context_menu(&self) -> Vec<MenuItem> {
        commands::context_menu(self.config.context_menu)
    }

    /// Convert the host's selection, or its whole document when nothing is selected.
    pub fn run<H: EditorHost + ?Sized>(
        &self,
        host: &mut H,
        mode: CaseMode,
    ) -> Result<RunOutcome, HostError> {
        let Some(mut target) = host.active_selection() else {
            log::info!("No focused editor or open document; nothing to convert");
            return Ok(RunOutcome::NoTarget);
        };

        if target.is_empty() {
            if !self.config.convert_whole_document_when_empty {
                log::info!("Selection is empty; whole-document conversion is disabled");
                return Ok(RunOutcome::NothingSelected);
            }
            match host.full_buffer() {
                Some(full) => target = full,
                None => {
                    log::info!("No document to fall back to; nothing to convert");
                    return Ok(RunOutcome::NoTarget);
                }
            }
            log::debug!("Empty selection, converting whole document {}", target.range);
        }

        let range = target.range;
        let changed = match case_convert::convert(&target.text, mode) {
            Cow::Borrowed(_) => false,
            Cow::Owned(converted) => {
                host.replace_range(range, &converted)?;
                true
            }
        };

        log::info!(
            "Converted {} to {} ({})",
            range,
            mode,
            if changed { "changed" } else { "unchanged" }
        );
        Ok(RunOutcome::Replaced { range, changed })
    }

    /// Run the command registered under `id`.
    pub fn run_command<H: EditorHost + ?Sized>(
        &self,
        id: &str,
        host: &mut H,
    ) -> Result<RunOutcome, PluginError> {
        let command =
            CaseCommand::from_id(id).ok_or_else(|| PluginError::UnknownCommand(id.to_string()))?;
        log::debug!("Running command '{}' ({})", command.id(), command.title());
        Ok(self.run(host, command.mode())?)
    }

    /// Run whatever command is bound to the pressed key.
    pub fn dispatch_event<H: EditorHost + ?Sized>(
        &self,
        event: &KeyEvent,
        host: &mut H,
    ) -> Result<RunOutcome, PluginError> {
        match self.keybindings.lookup(event) {
            Some(action) => self.run_command(action, host),
            None => {
                log::debug!("No binding for {:?}", event);
                Ok(RunOutcome::Unbound)
            }
        }
    }

    /// Run whatever command is bound to a chord string such as "Shift+Alt+C".
    pub fn dispatch_key<H: EditorHost + ?Sized>(
        &self,
        chord: &str,
        host: &mut H,
    ) -> Result<RunOutcome, PluginError> {
        let event = KeyEvent::from_chord(chord)?;
        self.dispatch_event(&event, host)
    }
}

impl Default for Plugin {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
