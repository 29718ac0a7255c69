//! Keybinding management methods for `Config`.
//!
//! Covers:
//! - Merging default keybindings into user config
//! - Validating keybinding entries

use super::config_struct::Config;
use crate::error::ConfigError;

impl Config {
    /// Merge default keybindings into the user's config.
    /// Only adds keybindings for actions that don't already exist in the user's config,
    /// so a user who rebinds or removes a chord for one command keeps that choice.
    pub fn merge_default_keybindings(&mut self) {
        let default_keybindings = crate::defaults::keybindings();

        let existing_actions: std::collections::HashSet<String> = self
            .keybindings
            .iter()
            .map(|kb| kb.action.clone())
            .collect();

        let mut added_count = 0;
        for default_kb in default_keybindings {
            if !existing_actions.contains(&default_kb.action) {
                log::info!(
                    "Adding new default keybinding: {} -> {}",
                    default_kb.key,
                    default_kb.action
                );
                self.keybindings.push(default_kb);
                added_count += 1;
            }
        }

        if added_count > 0 {
            log::info!(
                "Merged {} new default keybinding(s) into user config",
                added_count
            );
        }
    }

    /// Reject keybinding entries with a blank key or action.
    ///
    /// Chord syntax is checked later by the keybinding registry, which skips
    /// unparseable entries with a warning instead of failing the whole load.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, binding) in self.keybindings.iter().enumerate() {
            if binding.key.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "keybindings[{index}]: key is empty (action '{}')",
                    binding.action
                )));
            }
            if binding.action.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "keybindings[{index}]: action is empty (key '{}')",
                    binding.key
                )));
            }
        }
        Ok(())
    }

    /// Key chords bound to the given action, in config order.
    pub fn keys_for_action(&self, action: &str) -> Vec<&str> {
        self.keybindings
            .iter()
            .filter(|kb| kb.action == action)
            .map(|kb| kb.key.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::defaults::{TO_CAMEL_ACTION, TO_SNAKE_ACTION};
    use crate::{Config, ConfigError, KeyBinding};

    #[test]
    fn test_merge_adds_missing_defaults() {
        let mut config =
            Config::new().with_keybindings(vec![KeyBinding::new("Ctrl+K", TO_CAMEL_ACTION)]);
        config.merge_default_keybindings();

        assert_eq!(config.keys_for_action(TO_CAMEL_ACTION), vec!["Ctrl+K"]);
        assert_eq!(config.keys_for_action(TO_SNAKE_ACTION), vec!["Shift+Alt+S"]);
    }

    #[test]
    fn test_merge_is_stable_for_defaults() {
        let mut config = Config::default();
        config.merge_default_keybindings();
        assert_eq!(config.keybindings.len(), 2);
    }

    #[test]
    fn test_validate_rejects_blank_key() {
        let config = Config::new().with_keybindings(vec![KeyBinding::new("  ", TO_SNAKE_ACTION)]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(msg)) if msg.contains("keybindings[0]")
        ));
    }

    #[test]
    fn test_validate_rejects_blank_action() {
        let config = Config::new().with_keybindings(vec![KeyBinding::new("Ctrl+K", "")]);
        assert!(config.validate().is_err());
    }
}
