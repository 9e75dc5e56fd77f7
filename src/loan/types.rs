//! Loan DTOs
//!
//! Input and result types for the amortization calculator. Both are serde
//! types so hosts can decode inputs from query parameters and cache or ship
//! quotes as JSON.

use serde::{Deserialize, Serialize};

// == Defaults ==
/// Default loan term the financing page seeds its slider with
pub const DEFAULT_TERM_MONTHS: u32 = 60;

/// Default annual interest rate, in percent
pub const DEFAULT_ANNUAL_RATE_PERCENT: f64 = 7.5;

/// Default down payment as a fraction of the vehicle price
pub const DEFAULT_DOWN_PAYMENT_RATIO: f64 = 0.2;

// == Loan Input ==
/// Parameters of one financing calculation. Immutable per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    /// Vehicle price before any down payment
    pub principal_price: f64,
    /// Up-front payment, expected in `[0, principal_price]`
    pub down_payment: f64,
    /// Loan term in months, at least 1
    pub term_months: u32,
    /// Annual interest rate in percent (7.5 means 7.5%)
    pub annual_rate_percent: f64,
}

impl LoanInput {
    /// Creates a loan input from explicit parameters.
    pub fn new(
        principal_price: f64,
        down_payment: f64,
        term_months: u32,
        annual_rate_percent: f64,
    ) -> Self {
        Self {
            principal_price,
            down_payment,
            term_months,
            annual_rate_percent,
        }
    }

    /// Creates a loan input with the financing page's default 20% down payment.
    pub fn with_default_down_payment(
        principal_price: f64,
        term_months: u32,
        annual_rate_percent: f64,
    ) -> Self {
        Self::new(
            principal_price,
            principal_price * DEFAULT_DOWN_PAYMENT_RATIO,
            term_months,
            annual_rate_percent,
        )
    }
}

// == Loan Quote ==
/// Summary figures of a fixed-rate installment loan. Derived, not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanQuote {
    /// Amount borrowed: price minus down payment
    pub financed_amount: f64,
    /// Equal monthly installment over the loan term
    pub monthly_payment: f64,
    /// Interest paid over the whole term
    pub total_interest: f64,
    /// Monthly payment times term, plus the down payment
    pub total_cost: f64,
}
