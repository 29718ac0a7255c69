//! Core `Config` struct definition.

use crate::types::{KeyBinding, LogLevel};
use serde::{Deserialize, Serialize};

/// Plugin configuration, stored as YAML.
///
/// Every field carries a serde default so a partial file (or an empty one)
/// deserializes to the same values as `Config::default()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Key chord → command id bindings
    #[serde(default = "crate::defaults::keybindings")]
    pub keybindings: Vec<KeyBinding>,

    /// Add the convert commands to the editor context menu
    #[serde(default = "crate::defaults::bool_true")]
    pub context_menu: bool,

    /// Convert the whole document when a command runs with an empty selection
    #[serde(default = "crate::defaults::bool_true")]
    pub convert_whole_document_when_empty: bool,

    /// Debug log level (overridden by `RUST_LOG` and `--log-level`)
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keybindings: crate::defaults::keybindings(),
            context_menu: true,
            convert_whole_document_when_empty: true,
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context_menu(mut self, enabled: bool) -> Self {
        self.context_menu = enabled;
        self
    }

    pub fn with_whole_document_fallback(mut self, enabled: bool) -> Self {
        self.convert_whole_document_when_empty = enabled;
        self
    }

    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    pub fn with_keybindings(mut self, keybindings: Vec<KeyBinding>) -> Self {
        self.keybindings = keybindings;
        self
    }
}
