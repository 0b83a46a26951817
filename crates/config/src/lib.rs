//! Configuration loading, validation, and management for CogniBot.
//!
//! Loads configuration from `~/.cognibot/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use cognibot_core::Thresholds;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.cognibot/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the knowledge base lives
    #[serde(default)]
    pub knowledge: KnowledgeConfig,

    /// Confidence thresholds for the matching engine
    #[serde(default)]
    pub matching: Thresholds,

    /// Spelling correction and stopword settings
    #[serde(default)]
    pub nlp: NlpConfig,

    /// Interactive session settings
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeConfig {
    /// Path of the JSON knowledge document (relative paths resolve against
    /// the working directory)
    #[serde(default = "default_knowledge_path")]
    pub path: PathBuf,
}

fn default_knowledge_path() -> PathBuf {
    PathBuf::from("bot_knowledge.json")
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            path: default_knowledge_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NlpConfig {
    /// Run the spelling-correction pass at all
    #[serde(default = "default_true")]
    pub spell_correction: bool,

    /// Extra word list, one word per line with an optional frequency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dictionary_path: Option<PathBuf>,

    /// Largest edit distance the corrector searches (1 or 2)
    #[serde(default = "default_max_edit_distance")]
    pub max_edit_distance: u8,

    /// Words stripped in addition to the built-in English stopwords
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

fn default_true() -> bool {
    true
}
fn default_max_edit_distance() -> u8 {
    2
}

impl Default for NlpConfig {
    fn default() -> Self {
        Self {
            spell_correction: true,
            dictionary_path: None,
            max_edit_distance: default_max_edit_distance(),
            extra_stopwords: vec![],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name printed before every bot line
    #[serde(default = "default_bot_name")]
    pub bot_name: String,

    /// Commands that end the session (case-insensitive)
    #[serde(default = "default_exit_commands")]
    pub exit_commands: Vec<String>,
}

fn default_bot_name() -> String {
    "CogniBot".into()
}
fn default_exit_commands() -> Vec<String> {
    vec!["quit".into(), "exit".into()]
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            bot_name: default_bot_name(),
            exit_commands: default_exit_commands(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.cognibot/config.toml).
    ///
    /// Also checks environment variables:
    /// - `COGNIBOT_KNOWLEDGE_PATH` overrides `knowledge.path`
    /// - `COGNIBOT_BOT_NAME` overrides `session.bot_name`
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_at(&Self::config_path())
    }

    /// Load from `path`, then apply the environment overrides.
    pub fn load_at(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load_from(path)?;
        config.apply_env();
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(path) = std::env::var("COGNIBOT_KNOWLEDGE_PATH") {
            if !path.trim().is_empty() {
                self.knowledge.path = PathBuf::from(path);
            }
        }

        if let Ok(name) = std::env::var("COGNIBOT_BOT_NAME") {
            if !name.trim().is_empty() {
                self.session.bot_name = name;
            }
        }
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".cognibot")
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.matching.check().map_err(ConfigError::ValidationError)?;

        if !(1..=2).contains(&self.nlp.max_edit_distance) {
            return Err(ConfigError::ValidationError(
                "nlp.max_edit_distance must be 1 or 2".into(),
            ));
        }

        if self.session.exit_commands.iter().all(|c| c.trim().is_empty()) {
            return Err(ConfigError::ValidationError(
                "session.exit_commands needs at least one command".into(),
            ));
        }

        if self.knowledge.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "knowledge.path must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Generate a default config TOML string (for `onboard` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
