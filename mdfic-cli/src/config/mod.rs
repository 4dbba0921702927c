//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use mdfic_core::{copyedit::DEFAULT_MAX_WORDS, stats::DEFAULT_WPM, DEFAULT_MAX_LEN};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::commands::{OutputFormat, Strength};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Thread generation configuration
    #[serde(default)]
    pub thread: ThreadConfig,

    /// Copy-editing configuration
    #[serde(default)]
    pub copyedit: CopyeditConfig,

    /// Word count configuration
    #[serde(default)]
    pub wc: WcConfig,
}

/// Thread-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ThreadConfig {
    /// Nominal maximum length of each post
    pub max_len: usize,

    /// Text appended to every post
    pub appendix: String,

    /// Default output format
    pub format: OutputFormat,
}

impl Default for ThreadConfig {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
            appendix: "\n".to_string(),
            format: OutputFormat::Text,
        }
    }
}

/// Copy-editing configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CopyeditConfig {
    /// Word allowance per chunk sent to the editor
    pub max_words: usize,

    /// Default edit strength
    pub strength: Strength,
}

impl Default for CopyeditConfig {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
            strength: Strength::Light,
        }
    }
}

/// Word count configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct WcConfig {
    /// Reading speed in words per minute
    pub wpm: usize,
}

impl Default for WcConfig {
    fn default() -> Self {
        Self { wpm: DEFAULT_WPM }
    }
}

impl CliConfig {
    /// Load configuration from `path`, or the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Render configuration as TOML text
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}
