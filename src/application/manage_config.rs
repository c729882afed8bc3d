//! Config management use case

use crate::error::{Result, TrackerError};
use crate::infrastructure::{Config, FileSystemRepository, TrackerRepository};

const VALID_KEYS: &str = "storage_key, recent_days, exclude_future, created";

/// Service for managing tracker configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "storage_key" => Ok(config.storage_key),
            "recent_days" => Ok(config.recent_days.to_string()),
            "exclude_future" => Ok(config.exclude_future.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(TrackerError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "storage_key" => {
                // Reject keys the file storage cannot map to a slot file
                self.repository.storage().slot_path(value)?;
                config.storage_key = value.to_string();
            }
            "recent_days" => {
                let days: i64 = value.trim().parse().map_err(|_| {
                    TrackerError::Config(format!(
                        "recent_days must be a whole number, got '{}'",
                        value
                    ))
                })?;
                if days < 0 {
                    return Err(TrackerError::Config(format!(
                        "recent_days must not be negative, got {}",
                        days
                    )));
                }
                config.recent_days = days;
            }
            "exclude_future" => {
                config.exclude_future = value.trim().parse().map_err(|_| {
                    TrackerError::Config(format!(
                        "exclude_future must be 'true' or 'false', got '{}'",
                        value
                    ))
                })?;
            }
            "created" => {
                return Err(TrackerError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(TrackerError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: storage_key, recent_days, exclude_future",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::init;
    use tempfile::TempDir;

    fn service() -> (TempDir, ConfigService) {
        let temp = TempDir::new().unwrap();
        init(temp.path()).unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        (temp, ConfigService::new(repo))
    }

    #[test]
    fn test_get_defaults() {
        let (_temp, service) = service();
        assert_eq!(service.get("storage_key").unwrap(), "healthAndFitness");
        assert_eq!(service.get("recent_days").unwrap(), "7");
        assert_eq!(service.get("exclude_future").unwrap(), "false");
    }

    #[test]
    fn test_set_values() {
        let (_temp, service) = service();

        service.set("recent_days", "14").unwrap();
        service.set("exclude_future", "true").unwrap();
        service.set("storage_key", "cutting_2024").unwrap();

        let config = service.list().unwrap();
        assert_eq!(config.recent_days, 14);
        assert!(config.exclude_future);
        assert_eq!(config.storage_key, "cutting_2024");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let (_temp, service) = service();

        assert!(service.set("recent_days", "seven").is_err());
        assert!(service.set("recent_days", "-1").is_err());
        assert!(service.set("exclude_future", "maybe").is_err());
        assert!(service.set("storage_key", "../outside").is_err());
        assert!(service.set("created", "2024-01-01T00:00:00Z").is_err());
    }

    #[test]
    fn test_unknown_key() {
        let (_temp, service) = service();

        match service.get("mode").unwrap_err() {
            TrackerError::Config(msg) => assert!(msg.contains("Unknown config key: 'mode'")),
            other => panic!("Expected Config error, got {:?}", other),
        }
        assert!(service.set("mode", "daily").is_err());
    }
}
