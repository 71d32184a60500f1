//! Statistical outlier rule
//!
//! Classic 2-sigma check against the batch baseline: flags amounts far
//! from the batch's central tendency. With a 0- or 1-record batch the
//! stddev is 0 and the strict inequality can never hold.

use crate::amount;
use crate::baseline::AmountBaseline;
use crate::models::ExpenseRecord;
use crate::rules::Rule;

pub struct StatisticalOutlier;

impl Rule for StatisticalOutlier {
    fn code(&self) -> &'static str {
        "statistical_outlier"
    }

    fn weight(&self) -> u32 {
        30
    }

    fn description(&self) -> &'static str {
        "Amount is more than two standard deviations from the batch mean"
    }

    fn triggers(&self, expense: &ExpenseRecord, baseline: &AmountBaseline) -> bool {
        (amount::sanitize(expense.amount) - baseline.mean).abs() > 2.0 * baseline.std_dev
    }
}
