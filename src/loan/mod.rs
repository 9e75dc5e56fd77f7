//! Loan Module
//!
//! Fixed-rate installment loan math for the financing calculator page.

mod calculator;
mod types;

// Re-export public types
pub use calculator::calculate;
pub use types::{
    LoanInput, LoanQuote, DEFAULT_ANNUAL_RATE_PERCENT, DEFAULT_DOWN_PAYMENT_RATIO,
    DEFAULT_TERM_MONTHS,
};
