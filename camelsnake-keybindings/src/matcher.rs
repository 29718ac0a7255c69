//! Key event matching.
//!
//! Matches key events reported by the host editor against parsed KeyCombos.
//! Character keys compare case-insensitively; `CmdOrCtrl` in a binding is
//! resolved to the platform's primary modifier before comparison.

use crate::parser::{self, KeyCombo, Modifiers, ParseError, ParsedKey};
use crate::platform::resolve_cmd_or_ctrl;

/// A key press as reported by the host: concrete modifiers plus the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub modifiers: Modifiers,
    pub key: ParsedKey,
}

impl KeyEvent {
    pub fn new(modifiers: Modifiers, key: ParsedKey) -> Self {
        Self { modifiers, key }
    }

    /// Build an event from a chord string such as "Alt+Shift+c".
    ///
    /// A `CmdOrCtrl` in the chord is resolved to the concrete modifier the
    /// user would hold on this platform.
    pub fn from_chord(chord: &str) -> Result<Self, ParseError> {
        let combo = parser::parse_key_combo(chord)?;
        let (ctrl, super_key) = resolve_cmd_or_ctrl(
            combo.modifiers.cmd_or_ctrl,
            combo.modifiers.ctrl,
            combo.modifiers.super_key,
        );
        Ok(Self {
            modifiers: Modifiers {
                ctrl,
                super_key,
                cmd_or_ctrl: false,
                ..combo.modifiers
            },
            key: combo.key,
        })
    }
}

/// Matcher for comparing host key events against keybindings.
#[derive(Debug)]
pub struct KeybindingMatcher {
    /// Active modifiers from the event
    modifiers: Modifiers,
    /// The key from the event, characters uppercased
    key: ParsedKey,
}

impl KeybindingMatcher {
    /// Create a matcher from a host key event.
    pub fn from_event(event: &KeyEvent) -> Self {
        let key = match event.key {
            ParsedKey::Character(c) => ParsedKey::Character(c.to_ascii_uppercase()),
            ParsedKey::Named(named) => ParsedKey::Named(named),
        };

        Self {
            modifiers: Modifiers {
                cmd_or_ctrl: false, // Resolved during matching
                ..event.modifiers
            },
            key,
        }
    }

    /// Check if this event matches the given key combo.
    pub fn matches(&self, combo: &KeyCombo) -> bool {
        let key_matches = match (&combo.key, &self.key) {
            (ParsedKey::Character(combo_char), ParsedKey::Character(event_char)) => {
                event_char.eq_ignore_ascii_case(combo_char)
            }
            (ParsedKey::Named(combo_named), ParsedKey::Named(event_named)) => {
                combo_named == event_named
            }
            _ => false,
        };

        if !key_matches {
            return false;
        }

        self.modifiers_match(&combo.modifiers)
    }

    /// Check if modifiers match, handling CmdOrCtrl specially.
    fn modifiers_match(&self, combo_mods: &Modifiers) -> bool {
        let (expected_ctrl, expected_super) =
            resolve_cmd_or_ctrl(combo_mods.cmd_or_ctrl, combo_mods.ctrl, combo_mods.super_key);

        self.modifiers.ctrl == expected_ctrl
            && self.modifiers.alt == combo_mods.alt
            && self.modifiers.shift == combo_mods.shift
            && self.modifiers.super_key == expected_super
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_key_combo;

    /// Test that Modifiers comparison works correctly for CmdOrCtrl
    #[test]
    fn test_cmd_or_ctrl_modifiers() {
        let matcher_ctrl_shift = KeybindingMatcher {
            modifiers: Modifiers {
                ctrl: true,
                shift: true,
                ..Modifiers::default()
            },
            key: ParsedKey::Character('S'),
        };
        let matcher_super_shift = KeybindingMatcher {
            modifiers: Modifiers {
                super_key: true,
                shift: true,
                ..Modifiers::default()
            },
            key: ParsedKey::Character('S'),
        };

        let combo = parse_key_combo("CmdOrCtrl+Shift+S").unwrap();

        // On macOS, CmdOrCtrl means Super
        #[cfg(target_os = "macos")]
        {
            assert!(matcher_super_shift.matches(&combo));
            assert!(!matcher_ctrl_shift.matches(&combo));
        }

        // On non-macOS, CmdOrCtrl means Ctrl
        #[cfg(not(target_os = "macos"))]
        {
            assert!(matcher_ctrl_shift.matches(&combo));
            assert!(!matcher_super_shift.matches(&combo));
        }
    }

    #[test]
    fn test_character_matching_is_case_insensitive() {
        let combo = parse_key_combo("Shift+Alt+C").unwrap();
        let event = KeyEvent::new(
            Modifiers {
                shift: true,
                alt: true,
                ..Modifiers::default()
            },
            ParsedKey::Character('c'),
        );
        assert!(KeybindingMatcher::from_event(&event).matches(&combo));
    }

    #[test]
    fn test_extra_modifier_rejected() {
        let combo = parse_key_combo("Shift+Alt+C").unwrap();
        let event = KeyEvent::from_chord("Ctrl+Shift+Alt+C").unwrap();
        assert!(!KeybindingMatcher::from_event(&event).matches(&combo));
    }

    #[test]
    fn test_named_vs_character_rejected() {
        let combo = parse_key_combo("Alt+F1").unwrap();
        let event = KeyEvent::from_chord("Alt+1").unwrap();
        assert!(!KeybindingMatcher::from_event(&event).matches(&combo));
    }

    #[test]
    fn test_chord_with_cmd_or_ctrl_matches_binding() {
        let combo = parse_key_combo("CmdOrCtrl+Shift+S").unwrap();
        let event = KeyEvent::from_chord("CmdOrCtrl+Shift+s").unwrap();
        assert!(!event.modifiers.cmd_or_ctrl);
        assert!(KeybindingMatcher::from_event(&event).matches(&combo));
    }
}
