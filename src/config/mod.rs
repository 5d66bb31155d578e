//! # Configuration Management Module
//!
//! Settings for the `shadowmere` binary and the session shell, stored as
//! TOML. Every section has defaults, so a partial (or empty) file is valid.
//!
//! ## Configuration File Format
//!
//! ```toml
//! [game]
//! default_player_name = "Hero"
//! max_name_length = 24
//!
//! [sessions]
//! max_sessions = 64
//! idle_timeout_minutes = 30
//!
//! [logging]
//! level = "info"
//! file = "shadowmere.log"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shadowmere::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     println!("Default hero: {}", config.game.default_player_name);
//!     Config::create_default("config.toml").await?;
//!     Ok(())
//! }
//! ```
//!
//! Precedence: CLI args > config file > defaults.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub sessions: SessionsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name used when the player enters nothing.
    #[serde(default = "default_player_name")]
    pub default_player_name: String,
    /// Player names are cut to this many characters.
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
}

fn default_player_name() -> String {
    "Hero".to_string()
}

fn default_max_name_length() -> usize {
    24
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_player_name: default_player_name(),
            max_name_length: default_max_name_length(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionsConfig {
    /// Concurrent sessions kept by the session shell.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
    /// Sessions idle longer than this are pruned (minutes). 0 disables.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_minutes: u32,
}

fn default_max_sessions() -> usize {
    64
}

fn default_idle_timeout() -> u32 {
    30
}

impl Default for SessionsConfig {
    fn default() -> Self {
        Self {
            max_sessions: default_max_sessions(),
            idle_timeout_minutes: default_idle_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of error, warn, info, debug, trace.
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed level; unknown strings fall back to `Info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let content = Config::default().to_toml()?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| anyhow!("Failed to serialize config: {}", e))
    }
}
