//! Default values for `Config` fields.
//!
//! Referenced from `#[serde(default = "...")]` attributes so that partial
//! config files fill in missing fields with the same values as `Config::default()`.

use crate::types::KeyBinding;

/// Command id for converting to camelCase.
pub const TO_CAMEL_ACTION: &str = "camelsnake.toCamel";
/// Command id for converting to snake_case.
pub const TO_SNAKE_ACTION: &str = "camelsnake.toSnake";

pub fn keybindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("Shift+Alt+C", TO_CAMEL_ACTION),
        KeyBinding::new("Shift+Alt+S", TO_SNAKE_ACTION),
    ]
}

pub fn bool_true() -> bool {
    true
}
