//! Storage Backend Module
//!
//! Abstracts the persistent key/value medium the cache writes through.
//! The cache only ever needs three operations: fetch a string payload by
//! key, store one, and remove one. Anything that can do that — an in-memory
//! map, a directory of files, a browser-storage bridge — can back the cache.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::StorageError;

// == Storage Backend Trait ==
/// A string-keyed, string-payload persistent medium.
///
/// Implementations may fail on any operation; [`crate::cache::TtlCache`]
/// treats every failure as a cache miss and never propagates it.
pub trait StorageBackend: Send + Sync {
    /// Reads the raw payload stored under `key`, if any.
    fn fetch(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `payload` under `key`, overwriting any prior payload.
    fn store(&self, key: &str, payload: &str) -> Result<(), StorageError>;

    /// Removes the payload under `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

// == Memory Storage ==
/// In-memory backing medium.
///
/// The in-process stand-in for a real persistent medium: tests inject it to
/// observe exactly what the cache wrote, and hosts without durable storage
/// can use it as a plain memoization layer.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a payload is currently stored under `key`.
    ///
    /// Bypasses expiry entirely; this inspects the raw medium.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries
            .lock()
            .expect("storage mutex poisoned")
            .contains_key(key)
    }

    /// Returns the number of stored payloads.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("storage mutex poisoned").len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageBackend for MemoryStorage {
    fn fetch(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().expect("storage mutex poisoned");
        Ok(entries.get(key).cloned())
    }

    fn store(&self, key: &str, payload: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().expect("storage mutex poisoned");
        entries.insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().expect("storage mutex poisoned");
        entries.remove(key);
        Ok(())
    }
}

// == File Storage ==
/// Directory-backed medium: one JSON file per key.
///
/// The host-side analogue of browser persistent storage. Keys map to
/// `<dir>/<key>.json`; the directory is created on first write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Directory where payload files are stored
    dir: PathBuf,
}

impl FileStorage {
    /// Creates a file-backed store rooted at `dir`.
    ///
    /// The directory does not need to exist yet; it is created lazily on
    /// the first successful `store`.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Returns the path backing the given key.
    pub fn payload_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|e| StorageError::Unavailable(e.to_string()))
    }
}

impl StorageBackend for FileStorage {
    fn fetch(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.payload_path(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Unavailable(e.to_string())),
        }
    }

    fn store(&self, key: &str, payload: &str) -> Result<(), StorageError> {
        self.ensure_dir()?;
        fs::write(self.payload_path(key), payload)
            .map_err(|e| StorageError::Unavailable(e.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.payload_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Unavailable(e.to_string())),
        }
    }
}
