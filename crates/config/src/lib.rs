//! Configuration management for tern.
//!
//! This crate provides configuration loading and saving in TOML format
//! following XDG directory conventions. A missing configuration file is
//! not an error: the editor runs with built-in defaults. A file that
//! exists but cannot be read or parsed is reported as an error so the
//! caller can log it before falling back to defaults.

mod settings;
mod xdg;

pub use settings::{Config, Options};
pub use xdg::{get_config_dir, get_data_dir};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default values as constants
pub mod defaults {
    pub const TAB_SIZE: usize = 4;
    pub const SHOW_LINE_NUMBERS: bool = true;
    pub const LOG_LEVEL: &str = "info";
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// A missing file yields the default configuration; a file that
    /// exists but fails to read or parse is an error.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Get path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.options.tabsize, defaults::TAB_SIZE);
    }

    #[test]
    fn test_load_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[options\ntabsize = ").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.options.tabsize = 2;
        config.options.show_line_numbers = false;
        config
            .keys
            .insert("Ctrl-u".to_string(), "undo".to_string());
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.options.tabsize, 2);
        assert!(!loaded.options.show_line_numbers);
        assert_eq!(loaded.keys.get("Ctrl-u").map(String::as_str), Some("undo"));
    }

    #[test]
    fn test_comments_and_quoted_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r##"
# editor options
[options]
tabsize = 4        # cells per tab stop

[keys]
# quit stays on the default
Ctrl-z = "undo"
"##,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.keys.get("Ctrl-z").map(String::as_str), Some("undo"));
    }
}
