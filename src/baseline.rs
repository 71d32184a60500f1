//! Batch amount baseline
//!
//! Population statistics over every amount in the input batch, computed
//! once per scoring run and shared by all rule evaluations. Recomputed
//! fresh on every call: the same expense can score differently depending
//! on the batch it is compared against.

use crate::amount;
use crate::models::ExpenseRecord;
use serde::{Deserialize, Serialize};

/// Population mean / standard deviation for one batch of expenses
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AmountBaseline {
    /// Number of records in the batch
    pub count: usize,
    /// Population mean of all amounts, across every category
    pub mean: f64,
    /// Population standard deviation (divide by N, not N-1)
    pub std_dev: f64,
}

impl AmountBaseline {
    /// Compute the baseline over a batch.
    ///
    /// Divisors are guarded with `max(count, 1)`: an empty batch yields
    /// mean 0 / stddev 0. A single-record batch yields stddev 0, so the
    /// outlier rule cannot fire for it (the deviation would have to exceed
    /// zero while being exactly zero).
    pub fn compute(expenses: &[ExpenseRecord]) -> Self {
        let count = expenses.len();
        let divisor = count.max(1) as f64;

        let sum: f64 = expenses.iter().map(|e| amount::sanitize(e.amount)).sum();
        let mean = sum / divisor;

        let variance = expenses
            .iter()
            .map(|e| {
                let deviation = amount::sanitize(e.amount) - mean;
                deviation * deviation
            })
            .sum::<f64>()
            / divisor;

        Self {
            count,
            mean,
            std_dev: variance.sqrt(),
        }
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

    #[test]
    fn test_empty_batch_is_all_zeros() {
        let baseline = AmountBaseline::compute(&[]);
        assert_eq!(baseline.count, 0);
        assert_eq!(baseline.mean, 0.0);
        assert_eq!(baseline.std_dev, 0.0);
    }

    #[test]
    fn test_single_record_has_zero_stddev() {
        let baseline = AmountBaseline::compute(&[expense(250.0)]);
        assert_eq!(baseline.count, 1);
        assert_eq!(baseline.mean, 250.0);
        assert_eq!(baseline.std_dev, 0.0);
    }

    #[test]
    fn test_population_statistics() {
        // Population variance over [100, 200, 150, 175, 5000]:
        // mean 1125, variance 3_755_000, stddev ~1937.78
        let batch: Vec<_> = [100.0, 200.0, 150.0, 175.0, 5000.0]
            .into_iter()
            .map(expense)
            .collect();
        let baseline = AmountBaseline::compute(&batch);
        assert_eq!(baseline.mean, 1125.0);
        assert!((baseline.std_dev - 1937.7822).abs() < 0.001);
    }

    #[test]
    fn test_divides_by_n_not_n_minus_one() {
        let batch: Vec<_> = [10.0, 20.0].into_iter().map(expense).collect();
        let baseline = AmountBaseline::compute(&batch);
        // Population: variance 25, stddev 5. Sample (N-1) would give ~7.07.
        assert_eq!(baseline.std_dev, 5.0);
    }

    #[test]
    fn test_malformed_amounts_count_as_zero() {
        let batch = vec![expense(f64::NAN), expense(-50.0), expense(300.0)];
        let baseline = AmountBaseline::compute(&batch);
        assert_eq!(baseline.count, 3);
        assert_eq!(baseline.mean, 100.0);
    }
}
