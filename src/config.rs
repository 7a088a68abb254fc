//! Configuration handling for the TUI

use crate::state::Favorite;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the working directory and the config directory
const CONFIG_FILE: &str = "config.json";

pub const URL_ENV: &str = "RMT_REDMINE_URL";
pub const TOKEN_ENV: &str = "RMT_REDMINE_TOKEN";

/// Configuration problems detected after loading
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required configuration field `{0}`")]
    MissingField(&'static str),
}

/// Connection settings for the Redmine server
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RedmineConfig {
    /// Base URL, e.g. `https://redmine.example.com`
    pub url: String,
    /// API access key
    pub token: String,
    /// Only activities starting with one of these prefixes are offered
    pub activity_prefixes: Vec<String>,
    /// Custom field holding the follow-up date
    pub follow_up_field_id: Option<u32>,
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TuiConfig {
    pub redmine: RedmineConfig,
    /// Extra saved queries shown on the search screen
    pub favorites: Vec<Favorite>,
}

impl TuiConfig {
    /// Per-user config file path
    fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "rmt", "rmt-tui").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// First existing config file: working directory, then user config dir
    pub fn config_path() -> Option<PathBuf> {
        let local = PathBuf::from(CONFIG_FILE);
        if local.exists() {
            return Some(local);
        }
        Self::user_config_path().filter(|path| path.exists())
    }

    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Apply environment overrides through `lookup`
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(URL_ENV).filter(|v| !v.is_empty()) {
            self.redmine.url = url;
        }
        if let Some(token) = lookup(TOKEN_ENV).filter(|v| !v.is_empty()) {
            self.redmine.token = token;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.redmine.url.trim().is_empty() {
            return Err(ConfigError::MissingField("redmine.url"));
        }
        if self.redmine.token.trim().is_empty() {
            return Err(ConfigError::MissingField("redmine.token"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> TuiConfig {
        TuiConfig {
            redmine: RedmineConfig {
                url: "https://redmine.example".to_string(),
                token: "abc".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    mod parsing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_deserialize_full() {
            let json = r#"{
                "redmine": {
                    "url": "https://redmine.example",
                    "token": "abc",
                    "activity_prefixes": ["Dev"],
                    "follow_up_field_id": 17
                },
                "favorites": [{"id": 10, "name": "Backlog", "query": "project_id=3"}]
            }"#;
            let parsed: TuiConfig = serde_json::from_str(json).unwrap();

            assert_eq!(parsed.redmine.activity_prefixes, vec!["Dev".to_string()]);
            assert_eq!(parsed.redmine.follow_up_field_id, Some(17));
            assert_eq!(parsed.favorites.len(), 1);
            assert_eq!(parsed.favorites[0].name, "Backlog");
        }

        #[test]
        fn test_deserialize_from_empty_json() {
            let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
            assert_eq!(parsed, TuiConfig::default());
        }

        #[test]
        fn test_deserialize_with_extra_fields() {
            let json = r#"{"redmine": {"url": "u", "unknown_field": 1}}"#;
            let parsed: TuiConfig = serde_json::from_str(json).unwrap();
            assert_eq!(parsed.redmine.url, "u");
        }

        #[test]
        fn test_load_from_missing_file_fails() {
            let result = TuiConfig::load_from(Path::new("/nonexistent/rmt/config.json"));
            assert!(result.is_err());
        }

        #[test]
        fn test_load_from_file() {
            let path = std::env::temp_dir().join(format!("rmt-tui-{}.json", std::process::id()));
            fs::write(&path, r#"{"redmine": {"url": "https://r", "token": "t"}}"#).unwrap();

            let config = TuiConfig::load_from(&path).unwrap();
            fs::remove_file(&path).ok();

            assert_eq!(config.redmine.url, "https://r");
            assert!(config.validate().is_ok());
        }
    }

    mod overrides {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_environment_overrides_file() {
            let mut config = valid();
            config.apply_overrides(|key| match key {
                URL_ENV => Some("https://other".to_string()),
                _ => None,
            });
            assert_eq!(config.redmine.url, "https://other");
            assert_eq!(config.redmine.token, "abc");
        }

        #[test]
        fn test_empty_environment_values_are_ignored() {
            let mut config = valid();
            config.apply_overrides(|_| Some(String::new()));
            assert_eq!(config, valid());
        }
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_config() {
            assert_eq!(valid().validate(), Ok(()));
        }

        #[test]
        fn test_missing_url() {
            let config = TuiConfig::default();
            assert_eq!(
                config.validate(),
                Err(ConfigError::MissingField("redmine.url"))
            );
        }

        #[test]
        fn test_missing_token() {
            let mut config = valid();
            config.redmine.token = "  ".to_string();
            assert_eq!(
                config.validate(),
                Err(ConfigError::MissingField("redmine.token"))
            );
        }
    }
}
