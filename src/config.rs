use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, TkscoutError};
use crate::keywords::DEFAULT_STOP_WORDS;

/// Global tkscout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Stop words excluded from keyword extraction
    #[serde(default = "default_stop_words")]
    pub stop_words: Vec<String>,

    /// Minimum token length kept during keyword extraction
    #[serde(default = "default_min_token_len")]
    pub min_token_len: usize,

    /// How many keywords to show per title
    #[serde(default = "default_keyword_top_k")]
    pub keyword_top_k: usize,

    /// How many products the ranking shows by default
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Platform fee rate used for the net-GMV display line.
    /// Varies by market; this is display config, not pipeline logic.
    #[serde(default = "default_platform_fee_rate")]
    pub platform_fee_rate: f64,

    /// CNY per USD, used only to convert ¥ summaries for display
    #[serde(default = "default_usd_cny_rate")]
    pub usd_cny_rate: f64,
}

fn default_stop_words() -> Vec<String> {
    DEFAULT_STOP_WORDS.iter().map(|s| s.to_string()).collect()
}

fn default_min_token_len() -> usize {
    3
}

fn default_keyword_top_k() -> usize {
    10
}

fn default_top_n() -> usize {
    3
}

fn default_platform_fee_rate() -> f64 {
    0.05
}

fn default_usd_cny_rate() -> f64 {
    7.2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stop_words: default_stop_words(),
            min_token_len: default_min_token_len(),
            keyword_top_k: default_keyword_top_k(),
            top_n: default_top_n(),
            platform_fee_rate: default_platform_fee_rate(),
            usd_cny_rate: default_usd_cny_rate(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| TkscoutError::ConfigError(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Get the config file path
    ///
    /// Supports TKSCOUT_CONFIG environment variable for test isolation
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("TKSCOUT_CONFIG") {
            return Ok(PathBuf::from(path));
        }
        let dirs = ProjectDirs::from("", "", "tkscout")
            .ok_or_else(|| TkscoutError::ConfigError("Could not determine config directory".into()))?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}
