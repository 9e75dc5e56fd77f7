//! Cache Module
//!
//! An expiring key/value cache over an injected persistent medium, used to
//! avoid redundant network calls for semi-static data (homepage content,
//! header settings). Expiry is lazy: entries are checked and removed on
//! read, never by a background task.

mod entry;
mod stats;
mod storage;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use stats::CacheStats;
pub use storage::{FileStorage, MemoryStorage, StorageBackend};
pub use store::TtlCache;
