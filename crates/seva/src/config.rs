//! Configuration management for seva.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Data, Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::store::DEFAULT_KEY;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "seva";

/// Default database file name.
const DATABASE_FILE_NAME: &str = "donations.db";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `SEVA_`, nested with `__`)
/// 2. TOML config file at `~/.config/seva/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Listing configuration.
    pub listing: ListingConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the database file.
    /// Defaults to `~/.local/share/seva/donations.db`
    pub database_path: Option<PathBuf>,
    /// Key the donation list is stored under.
    pub key: String,
    /// Write the sample requests when nothing is stored yet.
    pub seed_on_empty: bool,
}

/// Listing-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Hide completed and cancelled requests unless asked otherwise.
    pub active_only: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: None, // Will be resolved to default at runtime
            key: DEFAULT_KEY.to_string(),
            seed_on_empty: true,
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self { active_only: true }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);
        Self::extract(&Self::layered(Toml::file(&config_file)))
    }

    fn extract(figment: &Figment) -> Result<Self> {
        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    fn layered(file: Data<Toml>) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(file)
            .merge(Env::prefixed("SEVA_").split("__"))
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        let key = &self.storage.key;
        if key.is_empty() {
            return Err(Error::ConfigValidation {
                message: "storage key must not be empty".to_string(),
            });
        }
        if key.chars().any(char::is_whitespace) {
            return Err(Error::ConfigValidation {
                message: format!("storage key must not contain whitespace: {key:?}"),
            });
        }
        Ok(())
    }

    /// Get the database path, resolving defaults if not set.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.storage
            .database_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(DATABASE_FILE_NAME))
    }
}
