//! Configuration management and validation.
//!
//! Provides the layered configuration for archive locations, logging, and station
//! registry overrides. Values come from built-in defaults, then an optional TOML
//! file, then command-line overrides.

use crate::app::models::StationId;
use crate::app::services::station_registry::StationRegistry;
use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_CLI_DIR, DEFAULT_LOG_LEVEL, DEFAULT_ONE_MINUTE_DIR,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Archive location settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    /// Root directory of archived climate reports
    pub cli_root: PathBuf,

    /// Root directory of archived one-minute series files
    pub one_minute_root: PathBuf,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME);
        Self {
            cli_root: data_dir.join(DEFAULT_CLI_DIR),
            one_minute_root: data_dir.join(DEFAULT_ONE_MINUTE_DIR),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level for the crate's own targets (error, warn, info, debug, trace)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Station registry override as written in the configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationEntry {
    pub station: StationId,
    pub timezone: String,
    pub office: String,
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub archive: ArchiveConfig,
    pub logging: LoggingConfig,
    pub stations: Vec<StationEntry>,
}

impl Config {
    /// Default configuration file location
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::configuration("Could not determine configuration directory"))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file {}", path.display()),
                e,
            )
        })?;
        Self::from_toml_str(&content)
    }

    /// Load defaults, then the config file (if any), then explicit root overrides
    pub fn load_layered(
        config_file: Option<&Path>,
        cli_root: Option<PathBuf>,
        one_minute_root: Option<PathBuf>,
    ) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(root) = cli_root {
            config.archive.cli_root = root;
        }
        if let Some(root) = one_minute_root {
            config.archive.one_minute_root = root;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.archive.cli_root.as_os_str().is_empty() {
            return Err(Error::configuration("archive.cli_root cannot be empty"));
        }
        if self.archive.one_minute_root.as_os_str().is_empty() {
            return Err(Error::configuration(
                "archive.one_minute_root cannot be empty",
            ));
        }

        const LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
        if !LEVELS.contains(&self.logging.level.as_str()) {
            return Err(Error::configuration(format!(
                "Invalid log level '{}': expected one of {}",
                self.logging.level,
                LEVELS.join(", ")
            )));
        }

        // Surfaces timezone and office problems at load time
        StationRegistry::load_exact(&self.stations)?;
        Ok(())
    }

    /// Build the station registry described by this configuration
    pub fn station_registry(&self) -> Result<StationRegistry> {
        StationRegistry::load_with_overrides(&self.stations)
    }
}
