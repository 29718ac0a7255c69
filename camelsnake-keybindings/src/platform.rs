//! Platform-specific keybinding resolution.
//!
//! Contains:
//! - `cmd_or_ctrl` modifier expansion (Cmd on macOS, Ctrl elsewhere)
//! - Named key alias table (string → `NamedKey`)

use crate::parser::NamedKey;

/// Resolve the `CmdOrCtrl` modifier for the current platform.
///
/// Returns `(expected_ctrl, expected_super)` given a `cmd_or_ctrl` flag and the
/// raw `ctrl`/`super_key` values from the parsed combo.
///
/// - macOS: `CmdOrCtrl` maps to Super (Cmd key).
/// - All other platforms: `CmdOrCtrl` maps to Ctrl.
#[inline]
pub(crate) fn resolve_cmd_or_ctrl(cmd_or_ctrl: bool, ctrl: bool, super_key: bool) -> (bool, bool) {
    if cmd_or_ctrl {
        #[cfg(target_os = "macos")]
        {
            (ctrl, true) // CmdOrCtrl -> Super on macOS
        }
        #[cfg(not(target_os = "macos"))]
        {
            (true, super_key) // CmdOrCtrl -> Ctrl on other platforms
        }
    } else {
        (ctrl, super_key)
    }
}

/// Parse a named key string into a [`NamedKey`].
///
/// Accepts human-readable aliases such as `"Enter"`, `"Return"`, `"Esc"`,
/// `"PgUp"`, arrow keys, and function keys F1–F12.  Matching is
/// case-insensitive.  Returns `None` for unrecognised strings.
pub(crate) fn parse_named_key(s: &str) -> Option<NamedKey> {
    match s.to_lowercase().as_str() {
        // Function keys
        "f1" => Some(NamedKey::F1),
        "f2" => Some(NamedKey::F2),
        "f3" => Some(NamedKey::F3),
        "f4" => Some(NamedKey::F4),
        "f5" => Some(NamedKey::F5),
        "f6" => Some(NamedKey::F6),
        "f7" => Some(NamedKey::F7),
        "f8" => Some(NamedKey::F8),
        "f9" => Some(NamedKey::F9),
        "f10" => Some(NamedKey::F10),
        "f11" => Some(NamedKey::F11),
        "f12" => Some(NamedKey::F12),

        // Common named keys
        "enter" | "return" => Some(NamedKey::Enter),
        "escape" | "esc" => Some(NamedKey::Escape),
        "space" => Some(NamedKey::Space),
        "tab" => Some(NamedKey::Tab),
        "backspace" => Some(NamedKey::Backspace),
        "delete" | "del" => Some(NamedKey::Delete),
        "insert" | "ins" => Some(NamedKey::Insert),
        "home" => Some(NamedKey::Home),
        "end" => Some(NamedKey::End),
        "pageup" | "pgup" => Some(NamedKey::PageUp),
        "pagedown" | "pgdn" => Some(NamedKey::PageDown),

        // Arrow keys
        "up" | "arrowup" => Some(NamedKey::ArrowUp),
        "down" | "arrowdown" => Some(NamedKey::ArrowDown),
        "left" | "arrowleft" => Some(NamedKey::ArrowLeft),
        "right" | "arrowright" => Some(NamedKey::ArrowRight),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_without_cmd_or_ctrl() {
        assert_eq!(resolve_cmd_or_ctrl(false, true, false), (true, false));
        assert_eq!(resolve_cmd_or_ctrl(false, false, true), (false, true));
    }

    #[test]
    fn test_resolve_cmd_or_ctrl() {
        #[cfg(target_os = "macos")]
        assert_eq!(resolve_cmd_or_ctrl(true, false, false), (false, true));
        #[cfg(not(target_os = "macos"))]
        assert_eq!(resolve_cmd_or_ctrl(true, false, false), (true, false));
    }

    #[test]
    fn test_named_key_aliases() {
        assert_eq!(parse_named_key("Return"), Some(NamedKey::Enter));
        assert_eq!(parse_named_key("ESC"), Some(NamedKey::Escape));
        assert_eq!(parse_named_key("pgdn"), Some(NamedKey::PageDown));
        assert_eq!(parse_named_key("left"), Some(NamedKey::ArrowLeft));
        assert_eq!(parse_named_key("C"), None);
    }
}
