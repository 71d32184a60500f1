//! Threshold gaming rule
//!
//! Flags claims parked within 10 units below (or exactly at) one of the
//! approval ceilings reviewers apply. An amount of 995 against a 999
//! ceiling clears auto-approval while staying as large as possible; that
//! pattern is worth a look.

use crate::amount;
use crate::baseline::AmountBaseline;
use crate::models::ExpenseRecord;
use crate::rules::Rule;

/// Approval ceilings known to reviewers
const APPROVAL_THRESHOLDS: [f64; 7] = [99.0, 199.0, 499.0, 999.0, 1999.0, 4999.0, 9999.0];

/// How far below a ceiling still counts as gaming it
const WINDOW: f64 = 10.0;

pub struct ThresholdGaming;

impl Rule for ThresholdGaming {
    fn code(&self) -> &'static str {
        "threshold_gaming"
    }

    fn weight(&self) -> u32 {
        25
    }

    fn description(&self) -> &'static str {
        "Amount sits within 10 units below an approval ceiling"
    }

    fn triggers(&self, expense: &ExpenseRecord, _baseline: &AmountBaseline) -> bool {
        let amount = amount::sanitize(expense.amount);
        APPROVAL_THRESHOLDS
            .iter()
            .any(|ceiling| amount >= ceiling - WINDOW && amount <= *ceiling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fires(amount: f64) -> bool {
        let e = ExpenseRecord {
            amount,
            ..Default::default()
        };
        ThresholdGaming.triggers(&e, &AmountBaseline::default())
    }

    #[test]
    fn test_window_boundaries_around_999() {
        assert!(fires(999.0)); // exactly at the ceiling
        assert!(fires(989.0)); // ceiling - 10, inclusive
        assert!(fires(995.5));
        assert!(!fires(988.0)); // one unit below the window
        assert!(!fires(1000.0)); // above the ceiling
    }

    #[test]
    fn test_every_ceiling_is_covered() {
        for ceiling in APPROVAL_THRESHOLDS {
            assert!(fires(ceiling), "ceiling {}", ceiling);
            assert!(fires(ceiling - 10.0), "window floor of {}", ceiling);
        }
    }

    #[test]
    fn test_amounts_between_windows_do_not_fire() {
        assert!(!fires(150.0));
        assert!(!fires(600.0));
        assert!(!fires(3000.0));
    }

    #[test]
    fn test_low_window_overlaps_are_harmless() {
        // 89 is in the 99 window; 88 is not in any
        assert!(fires(89.0));
        assert!(!fires(88.0));
    }
}
