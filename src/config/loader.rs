use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, MAX_GRID_UNITS};

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
    /// Uses `~/.config/dashstate/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("dashstate").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
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
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Grid columns, slice width, slice height and slices per row are non-zero
    /// - No grid dimension exceeds `MAX_GRID_UNITS`
    /// - The chart key prefix is not empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        let layout = &self.layout;
        for (name, value) in [
            ("layout.columns", layout.columns),
            ("layout.width", layout.width),
            ("layout.height", layout.height),
            ("layout.per_row", layout.per_row),
        ] {
            if value == 0 {
                return Err(ConfigError::ValidationError {
                    message: format!("{} must be greater than zero", name),
                });
            }
            if value > MAX_GRID_UNITS {
                return Err(ConfigError::ValidationError {
                    message: format!("{} must be at most {}", name, MAX_GRID_UNITS),
                });
            }
        }

        if layout.min_width > MAX_GRID_UNITS {
            return Err(ConfigError::ValidationError {
                message: format!("layout.min_width must be at most {}", MAX_GRID_UNITS),
            });
        }

        if self.charts.key_prefix.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "charts.key_prefix must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
