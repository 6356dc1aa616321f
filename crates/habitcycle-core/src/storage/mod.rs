mod config;
pub mod database;
mod memory;

pub use config::{Config, CycleConfig, PaletteConfig, StorageConfig};
pub use database::Database;
pub use memory::MemoryBlobStore;

use std::path::PathBuf;

use crate::error::StorageError;

/// String blobs under string keys.
///
/// Habit state and the theme flag are each stored as one blob. Writes
/// overwrite; there is no merge.
pub trait BlobStore {
    /// Read a blob, `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a blob, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<B: BlobStore + ?Sized> BlobStore for &B {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Returns the data directory, creating it if needed.
///
/// `HABITCYCLE_DATA_DIR` wins when set. Otherwise `~/.config/habitcycle`,
/// or `~/.config/habitcycle-dev` when `HABITCYCLE_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = match std::env::var_os("HABITCYCLE_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("HABITCYCLE_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("habitcycle-dev")
            } else {
                base_dir.join("habitcycle")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
