//! Cache Entry Module
//!
//! Defines the JSON envelope stored in the backing medium for each key.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

// == Cache Entry ==
/// A cached value together with the moment it was stored.
///
/// Serialized as `{"value": ..., "stored_at_ms": ...}` in the backing
/// medium. Expiry is never persisted; it is derived on read from the
/// cache's configured TTL, so the same entry can be fresh for one cache
/// instance and stale for another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    /// The stored value
    pub value: T,
    /// Storage timestamp (Unix milliseconds)
    pub stored_at_ms: u64,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Wraps a value with the current timestamp.
    pub fn new(value: T) -> Self {
        Self {
            value,
            stored_at_ms: current_timestamp_ms(),
        }
    }

    // == Age ==
    /// Returns the entry's age in milliseconds.
    ///
    /// Saturates to zero if the clock reads earlier than the storage
    /// timestamp (the entry was written by a machine with a faster clock).
    pub fn age_ms(&self) -> u64 {
        current_timestamp_ms().saturating_sub(self.stored_at_ms)
    }

    // == Is Expired ==
    /// Checks whether the entry is older than the given TTL.
    ///
    /// Boundary condition: an entry is expired only when its age strictly
    /// exceeds the TTL. An entry read exactly `ttl` after storage is still
    /// fresh.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age_ms() > ttl.as_millis() as u64
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_creation_records_now() {
        let before = current_timestamp_ms();
        let entry = CacheEntry::new("test_value".to_string());
        let after = current_timestamp_ms();

        assert_eq!(entry.value, "test_value");
        assert!(entry.stored_at_ms >= before);
        assert!(entry.stored_at_ms <= after);
    }

    #[test]
    fn test_fresh_entry_is_not_expired() {
        let entry = CacheEntry::new(42u32);
        assert!(!entry.is_expired(Duration::from_secs(60)));
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new(42u32);

        assert!(!entry.is_expired(Duration::from_millis(40)));

        // Wait for expiration
        sleep(Duration::from_millis(60));

        assert!(entry.is_expired(Duration::from_millis(40)));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = current_timestamp_ms();
        let entry = CacheEntry {
            value: "test".to_string(),
            stored_at_ms: now - 1_000,
        };

        // Exactly at the TTL boundary the entry is still fresh
        assert!(!entry.is_expired(Duration::from_millis(1_000)));
        // One millisecond past the boundary it is stale
        assert!(entry.is_expired(Duration::from_millis(999)));
    }

    #[test]
    fn test_age_saturates_on_future_timestamp() {
        let entry = CacheEntry {
            value: 0u8,
            stored_at_ms: current_timestamp_ms() + 10_000,
        };

        assert_eq!(entry.age_ms(), 0);
        assert!(!entry.is_expired(Duration::from_millis(1)));
    }

    #[test]
    fn test_envelope_json_shape() {
        let entry = CacheEntry {
            value: "hero".to_string(),
            stored_at_ms: 1_700_000_000_000,
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"value":"hero","stored_at_ms":1700000000000}"#
        );

        let decoded: CacheEntry<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, entry);
    }
}
