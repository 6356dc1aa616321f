//! Core error types for habitcycle-core.
//!
//! This module defines the error hierarchy using thiserror. Operations that
//! the tracker deliberately ignores (out-of-range indices, no active cycle)
//! are not errors; see [`crate::tracker::Outcome`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for habitcycle-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Blob store errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Blob store errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the backing store
    #[error("Failed to open store at {path}: {message}")]
    Open { path: PathBuf, message: String },

    /// Reading a key failed
    #[error("Failed to read '{key}': {message}")]
    Read { key: String, message: String },

    /// Writing a key failed. The in-memory state is intact and may be saved again.
    #[error("Failed to write '{key}': {message}")]
    Write { key: String, message: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// No cycle is stored under this month key
    #[error("Unknown month: {0}")]
    UnknownMonth(String),

    /// Not a `#rgb` or `#rrggbb` color
    #[error("Invalid color '{0}': expected #rgb or #rrggbb")]
    InvalidColor(String),

    /// Habit name is blank after trimming
    #[error("Habit name must not be empty")]
    EmptyName,

    /// Out of bounds
    #[error("{what} {position} out of range (1..={len})")]
    OutOfBounds {
        what: String,
        position: usize,
        len: usize,
    },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_converts_into_core_error() {
        let err: CoreError = StorageError::Write {
            key: "habit_theme".into(),
            message: "disk full".into(),
        }
        .into();
        assert!(matches!(err, CoreError::Storage(StorageError::Write { .. })));
        assert_eq!(
            err.to_string(),
            "Storage error: Failed to write 'habit_theme': disk full"
        );
    }

    #[test]
    fn out_of_bounds_message_is_one_based() {
        let err = ValidationError::OutOfBounds {
            what: "habit".into(),
            position: 4,
            len: 3,
        };
        assert_eq!(err.to_string(), "habit 4 out of range (1..=3)");
    }
}
