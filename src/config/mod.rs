//! Configuration management module
//!
//! Handles loading, saving, and validation of the user's presentation and
//! logging preferences. The member seed is not part of the configuration.

use crate::{MemberListError, Result, APP_NAME, CONFIG_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const MIN_TICK_RATE_MS: u64 = 1;
const MAX_TICK_RATE_MS: u64 = 5000;
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Title shown above the member list
    pub title: String,
    /// Event poll timeout in milliseconds
    pub tick_rate_ms: u64,
    /// Marker drawn in front of the selected row
    pub highlight_symbol: String,
    /// Log sink settings
    pub logging: LoggingConfig,
}

/// Log sink settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter level when RUST_LOG is unset
    pub level: String,
    /// Log file location; defaults to the data directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Members".to_string(),
            tick_rate_ms: 250,
            highlight_symbol: ">> ".to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl AppConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Event poll timeout
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(MemberListError::Config(
                "Title must not be empty".to_string(),
            ));
        }

        if self.tick_rate_ms < MIN_TICK_RATE_MS || self.tick_rate_ms > MAX_TICK_RATE_MS {
            return Err(MemberListError::Config(format!(
                "Tick rate must be between {} and {} ms, got {}",
                MIN_TICK_RATE_MS, MAX_TICK_RATE_MS, self.tick_rate_ms
            )));
        }

        self.logging.validate()
    }

    /// Set the list title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the event poll timeout
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate_ms = u64::try_from(tick_rate.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from `path`, or defaults if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            MemberListError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            MemberListError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                MemberListError::Config(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(path, content).map_err(|e| {
            MemberListError::Config(format!(
                "Failed to write config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/memberlist/memberlist.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            MemberListError::Config("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.level.to_ascii_lowercase().as_str()) {
            return Err(MemberListError::Config(format!(
                "Unknown log level '{}' (expected one of {})",
                self.level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}
