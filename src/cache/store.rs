//! Cache Store Module
//!
//! The expiring key/value cache: a fixed TTL over an injected storage
//! backend, with lazy expiry on read. Every storage or decoding failure is
//! swallowed and degrades to cache-miss behavior, so callers keep working
//! (just less efficiently) with a permanently broken backing medium.

use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::cache::entry::CacheEntry;
use crate::cache::stats::{CacheStats, StatsCounters};
use crate::cache::storage::StorageBackend;
use crate::config::CacheConfig;

// == TTL Cache ==
/// A time-to-live-bounded key/value cache over a persistent medium.
///
/// A read never returns a value older than the configured TTL; an expired
/// entry is deleted from the backing medium as a side effect of the read
/// that discovers it. There is no background sweep — expiry is checked
/// lazily on access only.
///
/// The cache provides no cross-key transactionality and no internal
/// locking; a multi-threaded host must serialize access per key itself.
#[derive(Debug)]
pub struct TtlCache<S: StorageBackend> {
    /// Injected backing medium
    storage: S,
    /// Maximum age before an entry reads as absent
    ttl: Duration,
    /// Performance counters
    stats: StatsCounters,
}

impl<S: StorageBackend> TtlCache<S> {
    // == Constructor ==
    /// Creates a cache over `storage` with the given TTL.
    pub fn new(storage: S, ttl: Duration) -> Self {
        Self {
            storage,
            ttl,
            stats: StatsCounters::default(),
        }
    }

    /// Creates a cache over `storage` with the TTL from `config`.
    pub fn with_config(storage: S, config: &CacheConfig) -> Self {
        Self::new(storage, config.ttl())
    }

    // == Get ==
    /// Retrieves a fresh value by key, or `None`.
    ///
    /// Returns `None` when the key is absent, the entry is older than the
    /// TTL (removing it from the backing medium in passing), the stored
    /// payload cannot be decoded, or the backing medium fails. None of
    /// those conditions ever surface as an error.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let payload = match self.storage.fetch(key) {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                self.stats.record_miss();
                return None;
            }
            Err(error) => {
                warn!(key, %error, "cache read failed");
                self.stats.record_miss();
                return None;
            }
        };

        let entry: CacheEntry<T> = match serde_json::from_str(&payload) {
            Ok(entry) => entry,
            Err(error) => {
                // Corrupt payloads read as absent. A later set overwrites them.
                warn!(key, %error, "cached payload is not decodable");
                self.stats.record_miss();
                return None;
            }
        };

        if entry.is_expired(self.ttl) {
            debug!(key, age_ms = entry.age_ms(), "cache entry expired");
            if let Err(error) = self.storage.remove(key) {
                warn!(key, %error, "failed to remove expired cache entry");
            }
            self.stats.record_expiration();
            self.stats.record_miss();
            return None;
        }

        self.stats.record_hit();
        Some(entry.value)
    }

    // == Set ==
    /// Stores a value under `key`, stamped with the current time.
    ///
    /// Overwrites any prior entry and resets its clock. Best-effort: a
    /// serialization failure or a refusing backing medium is logged and
    /// otherwise ignored, so `set` never raises to the caller.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        let entry = CacheEntry::new(value);
        let payload = match serde_json::to_string(&entry) {
            Ok(payload) => payload,
            Err(error) => {
                warn!(key, %error, "failed to encode cache entry");
                return;
            }
        };

        if let Err(error) = self.storage.store(key, &payload) {
            warn!(key, %error, "cache write failed");
        }
    }

    // == Clear ==
    /// Removes the entry under `key` unconditionally.
    ///
    /// Clearing an absent key is a no-op; storage failures are swallowed.
    pub fn clear(&self, key: &str) {
        if let Err(error) = self.storage.remove(key) {
            warn!(key, %error, "cache clear failed");
        }
    }

    // == Accessors ==
    /// Returns the configured TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the injected backing medium.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns a snapshot of the cache performance counters.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot()
    }
}
