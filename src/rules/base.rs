//! Base rule trait and the fixed rule set

use crate::baseline::AmountBaseline;
use crate::models::ExpenseRecord;

/// Trait for all expense scoring rules
///
/// A rule is a boolean predicate over one expense plus the batch baseline.
/// Rules never see each other's results and never mutate the record; the
/// engine sums the weights of every rule that fires.
///
/// # Example Implementation
///
/// ```ignore
/// pub struct MyRule;
///
/// impl Rule for MyRule {
///     fn code(&self) -> &'static str {
///         "my_rule"
///     }
///
///     fn weight(&self) -> u32 {
///         15
///     }
///
///     fn description(&self) -> &'static str {
///         "Flags my specific spending pattern"
///     }
///
///     fn triggers(&self, expense: &ExpenseRecord, _baseline: &AmountBaseline) -> bool {
///         expense.amount > 10_000.0
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Stable reason-code identifier
    ///
    /// Consumers filter and label by this string; it must never change
    /// once shipped.
    fn code(&self) -> &'static str;

    /// Points added to the suspicion score when the rule fires
    fn weight(&self) -> u32;

    /// Human-readable description of what this rule flags
    fn description(&self) -> &'static str;

    /// Whether the rule fires for this expense against the batch baseline
    fn triggers(&self, expense: &ExpenseRecord, baseline: &AmountBaseline) -> bool;
}

/// The product's fixed rule set, in evaluation order.
///
/// `reason_codes` on a scored expense preserves this order.
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(super::StatisticalOutlier),
        Box::new(super::RoundNumber),
        Box::new(super::WeekendOffice),
        Box::new(super::ThresholdGaming),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rule_order() {
        let rules = default_rules();
        let codes: Vec<_> = rules.iter().map(|r| r.code()).collect();
        assert_eq!(
            codes,
            vec![
                "statistical_outlier",
                "round_number",
                "weekend_office",
                "threshold_gaming"
            ]
        );
    }

    #[test]
    fn test_weights_match_product_policy() {
        let weights: Vec<_> = default_rules().iter().map(|r| r.weight()).collect();
        assert_eq!(weights, vec![30, 10, 20, 25]);
    }

    #[test]
    fn test_descriptions_are_nonempty() {
        for rule in default_rules() {
            assert!(!rule.description().is_empty(), "{}", rule.code());
        }
    }
}
