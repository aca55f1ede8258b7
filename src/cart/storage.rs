//! Storage Backends
//!
//! The cart store persists a single JSON blob under a fixed key. The backend
//! is injected so tests can run against an in-memory map and the binary can
//! use the filesystem.

use dashmap::DashMap;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Errors a storage backend can raise on write.
///
/// Reads never error: an unreadable or absent key degrades to `None`.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io: {0}")]
    Io(#[from] std::io::Error),
}

/// A durable string-keyed blob store.
pub trait Storage: Send + Sync {
    /// Returns the stored value for `key`, or `None` when unset or unreadable.
    fn read(&self, key: &str) -> Option<String>;

    /// Overwrites the value for `key`.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage for tests and headless contexts.
///
/// DashMap allows concurrent access without external Mutexes.
#[derive(Default)]
pub struct MemoryStorage {
    entries: DashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed storage: each key maps to one JSON file under `dir`.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_reads_back_writes() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read("k"), None);
        storage.write("k", "[1,2]").unwrap();
        assert_eq!(storage.read("k").as_deref(), Some("[1,2]"));
    }

    #[test]
    fn file_storage_round_trips() {
        let dir = std::env::temp_dir().join(format!("agrimart-test-{}", uuid::Uuid::new_v4()));
        let storage = FileStorage::new(&dir);
        assert_eq!(storage.read("cart"), None);
        storage.write("cart", "[]").unwrap();
        assert_eq!(storage.read("cart").as_deref(), Some("[]"));
        fs::remove_dir_all(dir).unwrap();
    }
}
