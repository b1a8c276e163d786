//! Key-value store with automatic serialization.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::StoreError;

/// Type-safe local store backed by one JSON file per key.
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`. Every `set` rewrites the full
/// snapshot for that key; last writer wins, which is sufficient because a
/// session has exactly one writer.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Open a store rooted at the given session directory, creating it if
    /// needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The session directory this store writes into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get a value from the store.
    ///
    /// Returns `None` if the key has never been written. A present but
    /// undecodable entry returns `StoreError::Serde`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.entry_path(key)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// Set a value in the store, replacing any prior snapshot for the key.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let path = self.entry_path(key)?;
        let bytes = serde_json::to_vec(value)?;
        fs::write(&path, bytes)?;
        Ok(())
    }

    /// Delete a key. Deleting an absent key is a no-op.
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        let path = self.entry_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Check whether a key has a stored snapshot.
    pub fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.entry_path(key)?.exists())
    }

    /// List all stored keys, sorted.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let name = entry?.file_name();
            if let Some(stem) = name.to_string_lossy().strip_suffix(".json") {
                keys.push(stem.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        // Keys are collection names, never paths.
        if key.is_empty() || key.contains(['/', '\\', '.']) {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}
