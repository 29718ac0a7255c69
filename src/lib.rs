//! camelsnake: convert identifiers between camelCase and snake_case.
//!
//! The conversion itself lives in [`case_convert`] and has no dependencies on
//! any editor. [`plugin::Plugin`] runs the conversion against anything that
//! implements [`host::EditorHost`], resolving commands by id or key chord.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod case_convert;
pub mod cli;
pub mod commands;
pub mod debug;
pub mod host;
pub mod plugin;

pub use case_convert::{CaseConverter, CaseMode, convert};
pub use plugin::{Plugin, PluginError, RunOutcome};
