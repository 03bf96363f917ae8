//! Configuration management for CodeMaster

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::catalog::Topic;
use crate::explain::ClaudeModel;
use crate::theme::Theme;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Selected theme name
    pub theme: String,

    /// Model used for AI explanations
    pub model: ClaudeModel,

    /// Token budget for one explanation
    pub max_tokens: u32,

    /// Topic shown on startup
    pub default_topic: Topic,

    /// How long the "correct!" banner stays up
    pub celebration_secs: u64,

    /// HTTP timeout for explanation requests
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "Tokyo Night".to_string(),
            model: ClaudeModel::default(),
            max_tokens: 1024,
            default_topic: Topic::default(),
            celebration_secs: 3,
            request_timeout_secs: 60,
        }
    }
}

impl Config {
    /// Load configuration from disk, or create default if not exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file, creating it with defaults if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {:?}", path))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse {:?}", path))
        } else {
            let config = Self::default();
            config.save_to(path)?;
            tracing::info!("Created default config at {:?}", path);
            Ok(config)
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "codemaster")
            .context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }

    /// Get the data directory path
    pub fn data_dir() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "codemaster")
            .context("Failed to determine data directory")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    /// Path of the log file written while the TUI is running
    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("codemaster.log"))
    }

    /// Get the active theme
    pub fn active_theme(&self) -> Theme {
        Theme::by_name(&self.theme).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_values() {
        let config = Config::default();
        assert_eq!(config.theme, "Tokyo Night");
        assert_eq!(config.model, ClaudeModel::Haiku45);
        assert_eq!(config.default_topic, Topic::JavaScript);
        assert_eq!(config.celebration_secs, 3);
    }

    #[test]
    fn config_deserializes_with_missing_fields() {
        let json = r#"{"default_topic":"react","model":"Sonnet45"}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.default_topic, Topic::React);
        assert_eq!(config.model, ClaudeModel::Sonnet45);
        assert_eq!(config.max_tokens, 1024);
        assert_eq!(config.theme, "Tokyo Night");
    }

    #[test]
    fn load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config::load_from(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config.max_tokens, Config::default().max_tokens);
    }

    #[test]
    fn save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = Config { default_topic: Topic::React, celebration_secs: 1, ..Config::default() };

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();

        assert_eq!(loaded.default_topic, Topic::React);
        assert_eq!(loaded.celebration_secs, 1);
    }

    #[test]
    fn load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config { theme: "Solarized".into(), ..Config::default() };
        assert_eq!(config.active_theme().name, "Tokyo Night");
    }
}
