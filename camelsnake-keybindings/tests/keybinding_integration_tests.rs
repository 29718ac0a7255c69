//! Integration tests for camelsnake-keybindings.
//!
//! These tests exercise the full parse → registry → lookup pipeline using the
//! same `KeyBinding` entries the config crate produces.

use camelsnake_config::{Config, KeyBinding, defaults};
use camelsnake_keybindings::{
    KeyEvent, KeybindingRegistry, Modifiers, NamedKey, ParsedKey, parse_key_combo,
};

// ---------------------------------------------------------------------------
// Registry construction
// ---------------------------------------------------------------------------

#[test]
fn registry_from_empty_config() {
    let registry = KeybindingRegistry::from_config(&[]);
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
}

#[test]
fn registry_from_default_config() {
    let config = Config::default();
    let registry = KeybindingRegistry::from_config(&config.keybindings);
    assert_eq!(registry.len(), 2);
}

#[test]
fn registry_skips_invalid_bindings() {
    let bindings = vec![
        KeyBinding::new("Ctrl+A", "valid_action"),
        KeyBinding::new("NotAKey", "invalid_action"),
        KeyBinding::new("Ctrl+Shift", "also_invalid"),
        KeyBinding::new("F5", "another_valid"),
    ];

    let registry = KeybindingRegistry::from_config(&bindings);
    assert_eq!(registry.len(), 2);
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

#[test]
fn default_chords_resolve_to_commands() {
    let registry = KeybindingRegistry::from_config(&defaults::keybindings());

    assert_eq!(
        registry.lookup_chord("Shift+Alt+C").unwrap(),
        Some(defaults::TO_CAMEL_ACTION)
    );
    assert_eq!(
        registry.lookup_chord("Alt+Shift+s").unwrap(),
        Some(defaults::TO_SNAKE_ACTION)
    );
}

#[test]
fn dash_chords_from_editor_keymaps_resolve() {
    let registry = KeybindingRegistry::from_config(&[KeyBinding::new(
        "Shift-Alt-C",
        defaults::TO_CAMEL_ACTION,
    )]);

    assert_eq!(
        registry.lookup_chord("Shift+Alt+C").unwrap(),
        Some(defaults::TO_CAMEL_ACTION)
    );
}

#[test]
fn unbound_chord_returns_none() {
    let registry = KeybindingRegistry::from_config(&defaults::keybindings());
    assert_eq!(registry.lookup_chord("Shift+Alt+X").unwrap(), None);
    assert_eq!(registry.lookup_chord("Alt+C").unwrap(), None);
}

#[test]
fn malformed_chord_is_an_error() {
    let registry = KeybindingRegistry::from_config(&defaults::keybindings());
    assert!(registry.lookup_chord("Shift+Alt").is_err());
}

#[test]
fn lookup_named_key_event() {
    let registry = KeybindingRegistry::from_config(&[KeyBinding::new("Ctrl+F7", "named")]);
    let event = KeyEvent::new(
        Modifiers {
            ctrl: true,
            ..Modifiers::default()
        },
        ParsedKey::Named(NamedKey::F7),
    );
    assert_eq!(registry.lookup(&event), Some("named"));
}

#[test]
fn combos_for_lists_every_binding_of_an_action() {
    let registry = KeybindingRegistry::from_config(&[
        KeyBinding::new("Shift+Alt+C", defaults::TO_CAMEL_ACTION),
        KeyBinding::new("Ctrl+F9", defaults::TO_CAMEL_ACTION),
        KeyBinding::new("Shift+Alt+S", defaults::TO_SNAKE_ACTION),
    ]);

    let combos: Vec<String> = registry
        .combos_for(defaults::TO_CAMEL_ACTION)
        .iter()
        .map(|combo| combo.to_string())
        .collect();
    assert_eq!(combos, vec!["Alt+Shift+C", "Ctrl+F9"]);
}

#[test]
fn parsed_combo_equals_display_form() {
    let combo = parse_key_combo("shift-alt-s").unwrap();
    assert_eq!(combo.to_string(), "Alt+Shift+S");
}
