//! Amortization Calculator
//!
//! Pure computation of a fixed-payment loan summary from validated inputs.
//! No side effects; the result depends only on the input, so it is safe to
//! call concurrently and repeatedly.

use crate::error::LoanError;
use crate::loan::types::{LoanInput, LoanQuote};

// == Calculate ==
/// Computes the summary figures of a fixed-rate installment loan.
///
/// Inputs are validated up front and malformed parameters fail fast with
/// [`LoanError::InvalidInput`]; silently propagating NaN or infinity into a
/// quote is never acceptable.
///
/// Branches:
/// - nothing left to finance (down payment covers the price): zero monthly
///   payment, zero interest, total cost equals the price;
/// - zero-interest loan: the financed amount is split evenly over the term;
/// - otherwise the standard annuity formula
///   `m = f * r * (1+r)^n / ((1+r)^n - 1)`.
///
/// In every branch `total_cost = monthly_payment * term + down_payment`.
pub fn calculate(input: &LoanInput) -> Result<LoanQuote, LoanError> {
    validate(input)?;

    let financed_amount = input.principal_price - input.down_payment;
    let term = f64::from(input.term_months);
    let monthly_rate = input.annual_rate_percent / 100.0 / 12.0;

    if financed_amount <= 0.0 {
        // No loan needed
        return Ok(LoanQuote {
            financed_amount,
            monthly_payment: 0.0,
            total_interest: 0.0,
            total_cost: input.principal_price,
        });
    }

    let monthly_payment = if monthly_rate == 0.0 {
        financed_amount / term
    } else {
        let growth = (1.0 + monthly_rate).powf(term);
        financed_amount * monthly_rate * growth / (growth - 1.0)
    };

    let total_paid = monthly_payment * term;

    Ok(LoanQuote {
        financed_amount,
        monthly_payment,
        total_interest: total_paid - financed_amount,
        total_cost: total_paid + input.down_payment,
    })
}

// == Validation ==
fn validate(input: &LoanInput) -> Result<(), LoanError> {
    if !input.principal_price.is_finite() || input.principal_price < 0.0 {
        return Err(LoanError::InvalidInput(
            "principal_price must be a non-negative number".to_string(),
        ));
    }
    if !input.down_payment.is_finite() || input.down_payment < 0.0 {
        return Err(LoanError::InvalidInput(
            "down_payment must be a non-negative number".to_string(),
        ));
    }
    if input.down_payment > input.principal_price {
        return Err(LoanError::InvalidInput(
            "down_payment cannot exceed principal_price".to_string(),
        ));
    }
    if input.term_months == 0 {
        return Err(LoanError::InvalidInput(
            "term_months must be at least 1".to_string(),
        ));
    }
    if !input.annual_rate_percent.is_finite() || input.annual_rate_percent < 0.0 {
        return Err(LoanError::InvalidInput(
            "annual_rate_percent must be a non-negative number".to_string(),
        ));
    }
    Ok(())
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {} within {} of {}",
            actual,
            tolerance,
            expected
        );
    }

    #[test]
    fn test_standard_financing_case() {
        // 30,000 vehicle, 6,000 down, 60 months at 7.5%
        let input = LoanInput::new(30000.0, 6000.0, 60, 7.5);
        let quote = calculate(&input).unwrap();

        assert_eq!(quote.financed_amount, 24000.0);
        assert_close(quote.monthly_payment, 480.90, 0.05);
        assert_close(quote.total_interest, 4854.0, 5.0);
        assert_close(quote.total_cost, 34854.0, 5.0);
    }

    #[test]
    fn test_fully_paid_down() {
        let input = LoanInput::new(18000.0, 18000.0, 48, 6.9);
        let quote = calculate(&input).unwrap();

        assert_eq!(quote.financed_amount, 0.0);
        assert_eq!(quote.monthly_payment, 0.0);
        assert_eq!(quote.total_interest, 0.0);
        assert_eq!(quote.total_cost, 18000.0);
    }

    #[test]
    fn test_zero_price() {
        let input = LoanInput::new(0.0, 0.0, 12, 7.5);
        let quote = calculate(&input).unwrap();

        assert_eq!(quote.monthly_payment, 0.0);
        assert_eq!(quote.total_cost, 0.0);
    }

    #[test]
    fn test_zero_interest_loan() {
        let input = LoanInput::new(24000.0, 0.0, 48, 0.0);
        let quote = calculate(&input).unwrap();

        assert_eq!(quote.total_interest, 0.0);
        assert_eq!(quote.monthly_payment, 500.0);
        assert_close(
            quote.monthly_payment * 48.0,
            quote.financed_amount,
            1e-9,
        );
        assert_eq!(quote.total_cost, 24000.0);
    }

    #[test]
    fn test_total_cost_identity_holds_with_interest() {
        let input = LoanInput::new(45000.0, 9000.0, 72, 5.25);
        let quote = calculate(&input).unwrap();

        assert_close(
            quote.total_cost,
            quote.monthly_payment * 72.0 + 9000.0,
            1e-6,
        );
        assert_close(
            quote.total_interest,
            quote.monthly_payment * 72.0 - quote.financed_amount,
            1e-6,
        );
    }

    #[test]
    fn test_monthly_payment_increases_with_rate() {
        let mut previous = 0.0;
        for rate in [1.0, 2.5, 5.0, 7.5, 10.0, 15.0] {
            let input = LoanInput::new(30000.0, 6000.0, 60, rate);
            let quote = calculate(&input).unwrap();
            assert!(
                quote.monthly_payment > previous,
                "payment at {}% should exceed payment at the lower rate",
                rate
            );
            previous = quote.monthly_payment;
        }
    }

    #[test]
    fn test_single_month_term() {
        let input = LoanInput::new(10000.0, 0.0, 1, 12.0);
        let quote = calculate(&input).unwrap();

        // One payment of principal plus one month of interest
        assert_close(quote.monthly_payment, 10000.0 * 1.01, 1e-6);
        assert_close(quote.total_interest, 100.0, 1e-6);
    }

    #[test]
    fn test_calculation_is_deterministic() {
        let input = LoanInput::new(30000.0, 6000.0, 60, 7.5);
        let first = calculate(&input).unwrap();
        let second = calculate(&input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rejects_zero_term() {
        let input = LoanInput::new(30000.0, 6000.0, 0, 7.5);
        let result = calculate(&input);
        assert!(matches!(result, Err(LoanError::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_nan_rate() {
        let input = LoanInput::new(30000.0, 6000.0, 60, f64::NAN);
        let result = calculate(&input);
        assert!(matches!(result, Err(LoanError::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_negative_price() {
        let input = LoanInput::new(-1.0, 0.0, 60, 7.5);
        let result = calculate(&input);
        assert!(matches!(result, Err(LoanError::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_down_payment_above_price() {
        let input = LoanInput::new(30000.0, 30001.0, 60, 7.5);
        let result = calculate(&input);
        assert!(matches!(result, Err(LoanError::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_infinite_down_payment() {
        let input = LoanInput::new(30000.0, f64::INFINITY, 60, 7.5);
        let result = calculate(&input);
        assert!(matches!(result, Err(LoanError::InvalidInput(_))));
    }

    #[test]
    fn test_quote_values_are_finite() {
        // Long term and high rate still produce finite figures
        let input = LoanInput::new(90000.0, 0.0, 120, 29.9);
        let quote = calculate(&input).unwrap();

        assert!(quote.monthly_payment.is_finite());
        assert!(quote.total_interest.is_finite());
        assert!(quote.total_cost.is_finite());
    }
}
