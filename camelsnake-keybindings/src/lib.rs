//! Keybinding system for camelsnake.
//!
//! Maps user-configurable key chords to command ids. Hosts report the chord a
//! user pressed as a [`KeyEvent`] (or as a chord string) and the registry
//! returns the bound command.
//!
//! Features:
//! - Configurable key combinations (Shift+Alt+C, CmdOrCtrl+Shift+S, etc.)
//! - Dash-separated chords as used by editor keymaps (Shift-Alt-C)
//! - Platform resolution of `CmdOrCtrl`

mod matcher;
pub mod parser;
mod platform;

pub use matcher::{KeyEvent, KeybindingMatcher};
pub use parser::{KeyCombo, Modifiers, NamedKey, ParseError, ParsedKey, parse_key_combo};

use camelsnake_config::KeyBinding;
use std::collections::HashMap;

/// Registry of keybindings mapping key combinations to action names.
#[derive(Debug, Default)]
pub struct KeybindingRegistry {
    /// Map of parsed key combos to action names
    bindings: HashMap<KeyCombo, String>,
}

impl KeybindingRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from config keybindings.
    ///
    /// Invalid keybinding strings are logged and skipped. When two entries
    /// parse to the same combo, the later one wins.
    pub fn from_config(keybindings: &[KeyBinding]) -> Self {
        let mut registry = Self::new();

        log::info!(
            "Building keybinding registry from {} config keybindings",
            keybindings.len()
        );
        for binding in keybindings {
            match parser::parse_key_combo(&binding.key) {
                Ok(combo) => {
                    log::info!(
                        "Registered keybinding: {} -> {} (parsed as: {})",
                        binding.key,
                        binding.action,
                        combo
                    );
                    if let Some(previous) = registry.bindings.insert(combo, binding.action.clone())
                        && previous != binding.action
                    {
                        log::warn!(
                            "Keybinding '{}' rebound from '{}' to '{}'",
                            binding.key,
                            previous,
                            binding.action
                        );
                    }
                }
                Err(e) => {
                    log::warn!(
                        "Invalid keybinding '{}' for action '{}': {}",
                        binding.key,
                        binding.action,
                        e
                    );
                }
            }
        }

        log::info!(
            "Keybinding registry initialized with {} bindings",
            registry.bindings.len()
        );
        registry
    }

    /// Look up an action for a key event.
    ///
    /// Returns the action name if a matching keybinding is found.
    pub fn lookup(&self, event: &KeyEvent) -> Option<&str> {
        let matcher = KeybindingMatcher::from_event(event);

        self.bindings
            .iter()
            .find(|(combo, _)| matcher.matches(combo))
            .map(|(_, action)| action.as_str())
    }

    /// Look up an action for a pressed chord given as a string, e.g. "Alt+Shift+c".
    pub fn lookup_chord(&self, chord: &str) -> Result<Option<&str>, ParseError> {
        let event = KeyEvent::from_chord(chord)?;
        Ok(self.lookup(&event))
    }

    /// Combos bound to `action`, sorted by their display form.
    pub fn combos_for(&self, action: &str) -> Vec<&KeyCombo> {
        let mut combos: Vec<&KeyCombo> = self
            .bindings
            .iter()
            .filter(|(_, bound)| bound.as_str() == action)
            .map(|(combo, _)| combo)
            .collect();
        combos.sort_by_key(|combo| combo.to_string());
        combos
    }

    /// Check if the registry has any bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Get the number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}
