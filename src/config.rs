//! Application configuration.

use crate::draft::DraftMode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Environment variable overriding [`AppConfig::storage_dir`].
pub const STORAGE_DIR_ENV: &str = "HERO_DRAFT_STORAGE_DIR";

/// Settings of the drafting host, read from `hero_draft.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding persisted preferences.
    #[serde(default = "default_storage_dir")]
    storage_dir: PathBuf,

    /// Draft format used when none is given on the command line.
    #[serde(default)]
    mode: DraftMode,

    /// Default number of heroes in a random sample.
    #[serde(default = "default_random_heroes")]
    random_heroes: usize,

    /// Default number of maps in a random sample.
    #[serde(default = "default_random_maps")]
    random_maps: usize,
}

#[instrument]
fn default_storage_dir() -> PathBuf {
    PathBuf::from(".hero_draft")
}

#[instrument]
fn default_random_heroes() -> usize {
    8
}

#[instrument]
fn default_random_maps() -> usize {
    2
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            mode: DraftMode::default(),
            random_heroes: default_random_heroes(),
            random_maps: default_random_maps(),
        }
    }
}

impl AppConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(storage_dir = %config.storage_dir.display(), mode = %config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies overrides from the environment.
    #[instrument(skip(self))]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(dir) = std::env::var(STORAGE_DIR_ENV) {
            debug!(%dir, "Storage dir overridden from environment");
            self.storage_dir = PathBuf::from(dir);
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
