//! Error types for caltrack

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the caltrack application
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Not a caltrack directory: {0}")]
    NotTrackerDirectory(PathBuf),

    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TrackerError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TrackerError::NotTrackerDirectory(_) => 2,
            TrackerError::InvalidEntry(_) | TrackerError::InvalidDate(_) => 3,
            TrackerError::EntryNotFound(_) => 4,
            TrackerError::Storage(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TrackerError::NotTrackerDirectory(path) => {
                format!(
                    "Not a caltrack directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'caltrack init' in this directory to start tracking\n\
                    • Navigate to an existing caltrack directory\n\
                    • Set CALTRACK_ROOT environment variable to your tracker path",
                    path.display()
                )
            }
            TrackerError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • today, yesterday\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2024-01-17)\n\n\
                    Example:\n\
                    caltrack add --date 2024-01-17 --intake 2000 --burned 500 --description 'Leg day'",
                    input
                )
            }
            TrackerError::EntryNotFound(reference) => {
                format!(
                    "Entry not found: {}\n\n\
                    Suggestions:\n\
                    • Use 'caltrack list' to see entry positions and ids\n\
                    • Positions start at 0 and shift down after a delete",
                    reference
                )
            }
            TrackerError::Storage(msg) => {
                format!(
                    "Storage error: {}\n\n\
                    The entries file under .caltrack/ could not be read.\n\
                    Fix or remove it to start from an empty history.",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TrackerError
pub type Result<T> = std::result::Result<T, TrackerError>;
