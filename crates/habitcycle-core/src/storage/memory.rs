//! In-memory blob store for tests and ephemeral sessions.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::BlobStore;
use crate::error::StorageError;

/// A `HashMap`-backed [`BlobStore`].
///
/// Writes can be made to fail with [`MemoryBlobStore::fail_writes`], which
/// stands in for a full disk.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: RefCell<HashMap<String, String>>,
    fail_writes: Cell<bool>,
    writes: Cell<usize>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key.
    pub fn with_blob(self, key: &str, value: &str) -> Self {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    /// Current value of a key, bypassing the trait.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.blobs.borrow().get(key).cloned()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.peek(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Write {
                key: key.to_string(),
                message: "quota exceeded".to_string(),
            });
        }
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
