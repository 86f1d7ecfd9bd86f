//! Key/value backends for persisted session entries.
//!
//! The session store only ever reads and writes a couple of string entries,
//! so a backend is a small string map. Writes are batched so that related
//! entries land together.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use thiserror::Error;
use tracing::warn;

/// Session file name in the storage directory
const SESSION_FILE: &str = "session.json";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Session storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session storage could not be encoded: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Session storage lock poisoned")]
    Poisoned,
}

/// A string key/value store scoped to one client session.
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write every entry in one batch.
    fn set_entries(&self, entries: &[(&str, String)]) -> Result<(), StorageError>;

    /// Remove every key in one batch. Missing keys are ignored.
    fn remove_entries(&self, keys: &[&str]) -> Result<(), StorageError>;
}

/// Process-lifetime storage, the equivalent of one browser tab.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set_entries(&self, new_entries: &[(&str, String)]) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        for (key, value) in new_entries {
            entries.insert((*key).to_string(), value.clone());
        }
        Ok(())
    }

    fn remove_entries(&self, keys: &[&str]) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        for key in keys {
            entries.remove(*key);
        }
        Ok(())
    }
}

/// Storage persisted as one JSON object file, rewritten on every batch.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
    lock: RwLock<()>,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }

    fn load_map(path: &Path) -> Result<HashMap<String, String>, StorageError> {
        if !path.exists() {
            return Ok(HashMap::new());
        }
        let contents = std::fs::read_to_string(path)?;
        match serde_json::from_str(&contents) {
            Ok(map) => Ok(map),
            Err(e) => {
                // A corrupted file reads as an empty session
                warn!(path = %path.display(), error = %e, "Ignoring unreadable session file");
                Ok(HashMap::new())
            }
        }
    }

    fn store_map(&self, map: &HashMap<String, String>) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir)?;
        let contents = serde_json::to_string_pretty(map)?;
        std::fs::write(self.path(), contents)?;
        Ok(())
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.read().map_err(|_| StorageError::Poisoned)?;
        let mut map = Self::load_map(&self.path())?;
        Ok(map.remove(key))
    }

    fn set_entries(&self, entries: &[(&str, String)]) -> Result<(), StorageError> {
        let _guard = self.lock.write().map_err(|_| StorageError::Poisoned)?;
        let mut map = Self::load_map(&self.path())?;
        for (key, value) in entries {
            map.insert((*key).to_string(), value.clone());
        }
        self.store_map(&map)
    }

    fn remove_entries(&self, keys: &[&str]) -> Result<(), StorageError> {
        let _guard = self.lock.write().map_err(|_| StorageError::Poisoned)?;
        let path = self.path();
        if !path.exists() {
            return Ok(());
        }
        let mut map = Self::load_map(&path)?;
        for key in keys {
            map.remove(*key);
        }
        self.store_map(&map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_batch_roundtrip() {
        let storage = MemoryStorage::new();
        storage
            .set_entries(&[("a", "1".to_string()), ("b", "2".to_string())])
            .unwrap();
        assert_eq!(storage.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(storage.get("b").unwrap().as_deref(), Some("2"));

        storage.remove_entries(&["a", "missing"]).unwrap();
        assert_eq!(storage.get("a").unwrap(), None);
        assert_eq!(storage.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_file_storage_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        FileStorage::new(dir.path())
            .set_entries(&[("idjassa_token", "tok".to_string())])
            .unwrap();

        let reopened = FileStorage::new(dir.path());
        assert_eq!(reopened.get("idjassa_token").unwrap().as_deref(), Some("tok"));
    }

    #[test]
    fn test_file_storage_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("not-created-yet"));
        assert_eq!(storage.get("anything").unwrap(), None);
        // Removing from a store that was never written is a no-op
        storage.remove_entries(&["anything"]).unwrap();
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_file_storage_corrupted_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        std::fs::write(storage.path(), "{not json").unwrap();

        assert_eq!(storage.get("idjassa_token").unwrap(), None);

        // Next write replaces the corrupted contents
        storage.set_entries(&[("k", "v".to_string())]).unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    }
}
