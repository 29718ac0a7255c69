//! Configuration system for camelsnake.
//!
//! This crate provides configuration loading, saving, and default values
//! for the case converter plugin. It includes:
//!
//! - Keybinding entries that map key chords to command ids
//! - Context-menu and whole-document conversion settings
//! - Debug log level
//! - YAML persistence with atomic writes

pub mod config;
pub mod defaults;
mod error;
mod types;

// Re-export main types for convenience
pub use config::Config;
pub use error::ConfigError;
pub use types::{KeyBinding, LogLevel};
