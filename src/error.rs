//! Error types for the dealership core utilities
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Storage Error Enum ==
/// Errors a cache backing medium can report.
///
/// These never escape [`crate::cache::TtlCache`]: the cache logs them and
/// degrades to miss-on-read / no-op-on-write. They are public so that custom
/// [`crate::cache::StorageBackend`] implementations can raise them.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing medium cannot be reached at all
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The backing medium refused a write for lack of space
    #[error("storage quota exceeded: {0}")]
    QuotaExceeded(String),

    /// The backing medium rejected the payload itself
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}

// == Loan Error Enum ==
/// Errors raised by the loan calculator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoanError {
    /// Malformed loan parameters (non-finite, negative, or out of range)
    #[error("invalid loan input: {0}")]
    InvalidInput(String),
}
