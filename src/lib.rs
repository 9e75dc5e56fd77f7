//! Dealership Core - computational utilities for a car-dealership site
//!
//! Two independent, stateless-per-call components: a fixed-rate loan
//! amortization calculator and an expiring key/value cache over an injected
//! persistent storage backend.

pub mod cache;
pub mod config;
pub mod error;
pub mod loan;

pub use cache::{CacheEntry, CacheStats, FileStorage, MemoryStorage, StorageBackend, TtlCache};
pub use config::CacheConfig;
pub use error::{LoanError, StorageError};
pub use loan::{calculate, LoanInput, LoanQuote};
