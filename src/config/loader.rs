use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::types::DirectoryConfig;

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

impl DirectoryConfig {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/employee-directory/config.toml` on Unix,
    /// or the equivalent via `dirs::config_dir()` elsewhere.
    /// Falls back to the current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("employee-directory").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `DirectoryConfig::default()`.
    /// - Otherwise parses it as TOML and validates it.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: DirectoryConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Both page sizes are at least 1
    /// - The default locale is not blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.list_page_size == 0 || self.card_page_size == 0 {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Page sizes must be at least 1 (list: {}, card: {})",
                    self.list_page_size, self.card_page_size
                ),
            });
        }

        if self.default_locale.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Default locale must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
