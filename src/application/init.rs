//! Initialize tracker use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, TrackerRepository};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new tracker at the specified path.
pub fn init(path: &Path) -> Result<Config> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    repo.initialize()?;

    let config = Config::new();
    repo.save_config(&config)?;

    info!(root = %path.display(), "initialized tracker");
    Ok(config)
}
