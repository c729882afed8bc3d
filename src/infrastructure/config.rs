//! Configuration management

use crate::domain::aggregate::{RecencyWindow, DEFAULT_RECENT_DAYS};
use crate::error::{Result, TrackerError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Storage slot the entries live in unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "healthAndFitness";

/// Name of the per-root metadata directory
pub const TRACKER_DIR: &str = ".caltrack";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_recent_days")]
    pub recent_days: i64,
    #[serde(default)]
    pub exclude_future: bool,
    pub created: DateTime<Utc>,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_recent_days() -> i64 {
    DEFAULT_RECENT_DAYS
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            storage_key: default_storage_key(),
            recent_days: default_recent_days(),
            exclude_future: false,
            created: Utc::now(),
        }
    }

    /// Recency window described by this config
    pub fn recency_window(&self) -> RecencyWindow {
        RecencyWindow {
            days: self.recent_days,
            exclude_future: self.exclude_future,
        }
    }

    /// Load config from .caltrack/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(TRACKER_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TrackerError::NotTrackerDirectory(path.to_path_buf())
            } else {
                TrackerError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .caltrack/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let tracker_dir = path.join(TRACKER_DIR);
        let config_path = tracker_dir.join("config.toml");

        if !tracker_dir.exists() {
            fs::create_dir(&tracker_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}
