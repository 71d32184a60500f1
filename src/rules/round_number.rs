//! Round number rule
//!
//! Round-number claims are weak signals of estimation rather than
//! receipted actuals, so exact multiples of 100 (or 1000) at or above 100
//! pick up a small score bump.

use crate::amount;
use crate::baseline::AmountBaseline;
use crate::models::ExpenseRecord;
use crate::rules::Rule;

/// Amounts below this never count as suspiciously round
const MIN_AMOUNT: f64 = 100.0;

pub struct RoundNumber;

impl Rule for RoundNumber {
    fn code(&self) -> &'static str {
        "round_number"
    }

    fn weight(&self) -> u32 {
        10
    }

    fn description(&self) -> &'static str {
        "Suspiciously round amount (exact multiple of 100 or 1000)"
    }

    fn triggers(&self, expense: &ExpenseRecord, _baseline: &AmountBaseline) -> bool {
        let amount = amount::sanitize(expense.amount);
        amount >= MIN_AMOUNT && (amount % 100.0 == 0.0 || amount % 1000.0 == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(amount: f64) -> ExpenseRecord {
        ExpenseRecord {
            amount,
            ..Default::default()
        }
    }

    fn fires(amount: f64) -> bool {
        RoundNumber.triggers(&expense(amount), &AmountBaseline::default())
    }

    #[test]
    fn test_boundary_at_100() {
        assert!(fires(100.0));
        assert!(!fires(99.0));
    }

    #[test]
    fn test_multiples_fire_once_each() {
        // 1000 satisfies both modulus checks but it is still one boolean rule
        assert!(fires(1000.0));
        assert!(fires(500.0));
        assert!(fires(9900.0));
    }

    #[test]
    fn test_non_round_amounts_do_not_fire() {
        assert!(!fires(150.0));
        assert!(!fires(999.0));
        assert!(!fires(100.01));
    }

    #[test]
    fn test_round_amounts_below_minimum_do_not_fire() {
        // 0 and small round-looking values are everyday claims
        assert!(!fires(0.0));
        assert!(!fires(50.0));
    }
}
