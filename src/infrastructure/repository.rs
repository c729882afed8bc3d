//! File system repository

use crate::error::{Result, TrackerError};
use crate::infrastructure::config::TRACKER_DIR;
use crate::infrastructure::{Config, FileStorage};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for tracker root operations
pub trait TrackerRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .caltrack/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .caltrack/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .caltrack directory exists
    fn is_initialized(&self) -> bool;

    /// Create .caltrack directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of TrackerRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover tracker root by walking up from current directory
    /// First checks CALTRACK_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("CALTRACK_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_tracker_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(TrackerError::Config(format!(
                    "CALTRACK_ROOT is set to '{}' but no .caltrack directory found. \
                    Run 'caltrack init' in that directory or unset CALTRACK_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover tracker root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_tracker_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(TrackerError::NotTrackerDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Storage holding the entry slots of this tracker
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.root.join(TRACKER_DIR))
    }

    fn has_tracker_dir(path: &Path) -> bool {
        path.join(TRACKER_DIR).is_dir()
    }
}

impl TrackerRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_tracker_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let tracker_dir = self.root.join(TRACKER_DIR);

        if tracker_dir.exists() {
            return Err(TrackerError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&tracker_dir)?;
        Ok(())
    }
}
