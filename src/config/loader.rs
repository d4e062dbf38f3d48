use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/storefront/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("storefront").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The endpoint is an absolute http(s) URL
    /// - The header title is not blank
    /// - The tick rate is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = &self.catalog.endpoint;
        let url = reqwest::Url::parse(endpoint).map_err(|e| ConfigError::ValidationError {
            message: format!("Invalid catalog endpoint '{}': {}", endpoint, e),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Catalog endpoint '{}' must use http or https",
                    endpoint
                ),
            });
        }

        if self.display.title.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Display title must not be empty".to_string(),
            });
        }

        if self.display.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.catalog.request_timeout_seconds.map(Duration::from_secs)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.display.tick_rate_ms)
    }
}
