//! Configuration for Votum.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::requests::DEFAULT_K;
use super::votes::Strategy;
use crate::{VotumError, VotumResult};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "votum.toml";

/// Main configuration for Votum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Consensus settings.
    #[serde(default)]
    pub consensus: ConsensusConfig,
}

/// General settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Consensus settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusConfig {
    /// Strategy used when the caller does not pick one.
    #[serde(default = "default_strategy")]
    pub default_strategy: Strategy,

    /// Margin threshold for first_to_ahead_by_k.
    #[serde(default = "default_k")]
    pub k: i64,
}

impl Default for ConsensusConfig {
    fn default() -> Self {
        Self {
            default_strategy: default_strategy(),
            k: default_k(),
        }
    }
}

fn default_strategy() -> Strategy {
    Strategy::FirstToAheadByK
}

fn default_k() -> i64 {
    DEFAULT_K
}

impl ConsensusConfig {
    /// Checks values that serde cannot reject on its own.
    pub fn validate(&self) -> VotumResult<()> {
        if self.k < 1 {
            return Err(VotumError::config(format!(
                "consensus.k must be >= 1 (got {})",
                self.k
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> VotumResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.consensus.validate()?;
        Ok(config)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> VotumResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            general: GeneralConfig::default(),
            consensus: ConsensusConfig::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
