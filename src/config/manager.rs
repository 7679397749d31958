//! Configuration manager for loading and saving page configuration
//!
//! Configuration lives in `$SHOWCASE_HOME/Showcase/config.json` and is
//! written atomically through a temporary file to prevent corruption.

use crate::config::models::ShowcaseConfig;
use crate::error::{Result, ShowcaseError, StringError};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming the base directory for config and logs
pub const HOME_ENV_VAR: &str = "SHOWCASE_HOME";

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Get the directory holding configuration and logs
    ///
    /// Returns: `$SHOWCASE_HOME/Showcase`, or `./Showcase` when unset
    pub fn get_config_dir() -> PathBuf {
        let home = std::env::var(HOME_ENV_VAR).unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join("Showcase")
    }

    /// Get the path to the configuration file
    pub fn get_config_path() -> PathBuf {
        Self::get_config_dir().join("config.json")
    }

    /// Load configuration from the default location
    pub fn load() -> Result<ShowcaseConfig> {
        Self::load_from(&Self::get_config_path())
    }

    /// Load configuration from a file
    ///
    /// A missing or corrupt file yields the default configuration, and
    /// invalid sections are replaced by their defaults.
    pub fn load_from(path: &Path) -> Result<ShowcaseConfig> {
        if !path.exists() {
            info!("Configuration file not found, using defaults");
            return Ok(ShowcaseConfig::default());
        }

        let json = std::fs::read_to_string(path)?;

        match serde_json::from_str(&json) {
            Ok(config) => {
                info!("Configuration loaded from {}", path.display());
                Ok(ShowcaseConfig::sanitized(config))
            }
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {}", e);
                Ok(ShowcaseConfig::default())
            }
        }
    }

    /// Save configuration to the default location
    pub fn save(config: &ShowcaseConfig) -> Result<()> {
        Self::save_to(&Self::get_config_path(), config)
    }

    /// Save configuration to a file with an atomic replace
    pub fn save_to(path: &Path, config: &ShowcaseConfig) -> Result<()> {
        let config_dir = path
            .parent()
            .ok_or_else(|| ShowcaseError::ConfigError(StringError::new("Invalid config path")))?;
        std::fs::create_dir_all(config_dir)?;

        let json = serde_json::to_string_pretty(config)?;
        let mut temp = tempfile::NamedTempFile::new_in(config_dir)?;
        temp.write_all(json.as_bytes())?;
        temp.persist(path)
            .map_err(|e| ShowcaseError::ConfigError(Box::new(e)))?;

        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}
