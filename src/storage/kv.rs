//! File-backed key/value store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error types for durable storage operations.
///
/// Storage errors are never surfaced to the user: callers log them and fall
/// back to an empty or default value.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem error while reading or writing a stored value.
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error serializing a value for storage.
    #[error("failed to serialize stored value: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Error deserializing a previously stored value.
    #[error("failed to deserialize stored value: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// Durable store mapping well-known string keys to string blobs.
///
/// Each key is one file under the store's root directory; a `put` overwrites
/// the whole value (no incremental or append persistence).
#[derive(Debug, Clone)]
pub struct KeyValueStore {
    root: PathBuf,
}

impl KeyValueStore {
    /// Opens (and creates if needed) a store rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Returns the stored value for `key`, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` for filesystem errors other than the key
    /// not existing.
    pub fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    /// Overwrites the value stored under `key` wholesale.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the value cannot be written.
    pub fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    /// Root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}
