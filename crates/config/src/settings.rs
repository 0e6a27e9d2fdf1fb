//! Configuration structures for tern settings.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Editor options
    #[serde(default)]
    pub options: Options,

    /// Key binding overrides: symbolic key name -> action name
    #[serde(default)]
    pub keys: BTreeMap<String, String>,
}

/// The `[options]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Options {
    /// Tab size (number of screen cells per tab stop)
    #[serde(default = "default_tab_size")]
    pub tabsize: usize,

    /// Show the line number gutter
    #[serde(
        default = "default_show_line_numbers",
        deserialize_with = "deserialize_flexible_bool"
    )]
    pub show_line_numbers: bool,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// Default value functions for serde
fn default_tab_size() -> usize {
    defaults::TAB_SIZE
}

fn default_show_line_numbers() -> bool {
    defaults::SHOW_LINE_NUMBERS
}

fn default_log_level() -> String {
    defaults::LOG_LEVEL.to_string()
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tabsize: default_tab_size(),
            show_line_numbers: default_show_line_numbers(),
            log_level: default_log_level(),
        }
    }
}

/// Accept `true`/`false`, `1`/`0`, and their string spellings.
fn deserialize_flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct FlexibleBool;

    impl de::Visitor<'_> for FlexibleBool {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a boolean, 0/1, or \"true\"/\"false\"/\"1\"/\"0\"")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
            Ok(v != 0)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
            Ok(v != 0)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
            match v {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
            }
        }
    }

    deserializer.deserialize_any(FlexibleBool)
}

impl Config {
    /// Clamp out-of-range option values back to their defaults.
    ///
    /// Returns a description of every correction made so the caller can
    /// log them; the configuration itself stays usable either way.
    pub fn normalize(&mut self) -> Vec<String> {
        let mut corrections = Vec::new();

        if self.options.tabsize == 0 {
            corrections.push(format!(
                "tabsize must be a positive integer, using default {}",
                defaults::TAB_SIZE
            ));
            self.options.tabsize = defaults::TAB_SIZE;
        }

        if self.options.log_level.parse::<LogLevelCheck>().is_err() {
            corrections.push(format!(
                "unknown log_level \"{}\", using default \"{}\"",
                self.options.log_level,
                defaults::LOG_LEVEL
            ));
            self.options.log_level = defaults::LOG_LEVEL.to_string();
        }

        corrections
    }
}

/// Minimal validity check for the log level string, kept local so this
/// crate does not depend on the logger crate.
struct LogLevelCheck;

impl std::str::FromStr for LogLevelCheck {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" | "info" | "warn" | "warning" | "error" => Ok(LogLevelCheck),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.options.tabsize, 4);
        assert!(config.options.show_line_numbers);
        assert_eq!(config.options.log_level, "info");
        assert!(config.keys.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            [options]
            tabsize = 8
            show_line_numbers = false

            [keys]
            Ctrl-q = "quit"
            ArrowUp = "move_up"
            "#,
        )
        .unwrap();

        assert_eq!(config.options.tabsize, 8);
        assert!(!config.options.show_line_numbers);
        assert_eq!(config.keys.get("Ctrl-q").map(String::as_str), Some("quit"));
        assert_eq!(
            config.keys.get("ArrowUp").map(String::as_str),
            Some("move_up")
        );
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.options.tabsize, 4);
        assert!(config.keys.is_empty());
    }

    #[test]
    fn test_flexible_bool_accepts_one() {
        let config: Config = toml::from_str(
            r#"
            [options]
            show_line_numbers = 1
            "#,
        )
        .unwrap();
        assert!(config.options.show_line_numbers);

        let config: Config = toml::from_str(
            r#"
            [options]
            show_line_numbers = "1"
            "#,
        )
        .unwrap();
        assert!(config.options.show_line_numbers);

        let config: Config = toml::from_str(
            r#"
            [options]
            show_line_numbers = "true"
            "#,
        )
        .unwrap();
        assert!(config.options.show_line_numbers);
    }

    #[test]
    fn test_flexible_bool_rejects_garbage() {
        let result: Result<Config, _> = toml::from_str(
            r#"
            [options]
            show_line_numbers = "maybe"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_normalize_corrects_zero_tabsize() {
        let mut config: Config = toml::from_str(
            r#"
            [options]
            tabsize = 0
            "#,
        )
        .unwrap();

        let corrections = config.normalize();
        assert_eq!(corrections.len(), 1);
        assert_eq!(config.options.tabsize, 4);
    }

    #[test]
    fn test_normalize_corrects_bad_log_level() {
        let mut config = Config::default();
        config.options.log_level = "loud".to_string();

        let corrections = config.normalize();
        assert_eq!(corrections.len(), 1);
        assert_eq!(config.options.log_level, "info");
    }

    #[test]
    fn test_normalize_is_quiet_on_valid_config() {
        let mut config = Config::default();
        assert!(config.normalize().is_empty());
    }
}
