//! Config persistence and path resolution for `Config`.
//!
//! Covers:
//! - `load` / `save` (YAML file I/O with atomic write) at the default location
//! - `load_from` / `save_to` for explicit paths
//! - XDG-style path helpers (`config_path`, `config_dir`)

use super::config_struct::Config;
use crate::error::ConfigError;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

impl Config {
    /// Load configuration from the default path, creating it if missing
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, creating a default file there if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        log::info!("Config path: {:?}", path);

        if path.exists() {
            log::info!("Loading existing config from {:?}", path);

            let contents = fs::read_to_string(path).map_err(ConfigError::from)?;

            // An empty file is a valid, all-defaults config; serde_yaml_ng
            // reports it as a parse error otherwise.
            let mut config: Config = if contents.trim().is_empty() {
                Self::default()
            } else {
                serde_yaml_ng::from_str(&contents).map_err(ConfigError::from)?
            };

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {e}");
                return Err(e.into());
            }

            // Merge in any new default keybindings that don't exist in user's config
            config.merge_default_keybindings();

            Ok(config)
        } else {
            log::info!("Config file not found, creating default at {:?}", path);
            let config = Self::default();
            if let Err(e) = config.save_to(path) {
                log::error!("Failed to save default config: {}", e);
                return Err(e);
            }

            log::info!("Default config created successfully");
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(ConfigError::from)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::from)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(ConfigError::from)?;
        fs::rename(&temp_path, path).map_err(ConfigError::from)?;

        Ok(())
    }

    /// Get the configuration file path (using XDG convention)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("camelsnake")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // Use XDG convention on all platforms: ~/.config/camelsnake/config.yaml
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("camelsnake")
            } else {
                PathBuf::from(".")
            }
        }
    }
}
