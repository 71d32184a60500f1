//! Anomaly scoring engine
//!
//! Two linear passes over the batch: compute the amount baseline, then
//! evaluate the fixed rule set against each expense. Pure and stateless:
//! statistics are recomputed fresh on every call, nothing is cached
//! between invocations, and input records are never mutated — callers get
//! new `ScoredExpense` values in input order.

use crate::baseline::AmountBaseline;
use crate::models::{ExpenseRecord, ScoredExpense, Severity};
use crate::rules::{default_rules, Rule};
use rayon::prelude::*;
use tracing::debug;

/// Scores expense batches with the product's fixed rule set
pub struct AnomalyScorer {
    rules: Vec<Box<dyn Rule>>,
}

impl AnomalyScorer {
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    /// Rule catalog in evaluation order
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Score a batch of expenses.
    ///
    /// Output has the same length and order as the input. Scores are
    /// batch-relative: the outlier baseline is recomputed from the full
    /// input on every call, so the same record can score differently in
    /// different batches.
    pub fn score(&self, expenses: &[ExpenseRecord]) -> Vec<ScoredExpense> {
        let baseline = AmountBaseline::compute(expenses);
        debug!(
            "scoring {} expenses (mean {:.2}, stddev {:.2})",
            expenses.len(),
            baseline.mean,
            baseline.std_dev
        );

        // Per-expense evaluation is independent; order is preserved by the
        // indexed collect, so the result matches sequential evaluation.
        expenses
            .par_iter()
            .map(|expense| self.score_one(expense, &baseline))
            .collect()
    }

    fn score_one(&self, expense: &ExpenseRecord, baseline: &AmountBaseline) -> ScoredExpense {
        let mut suspicion_score = 0;
        let mut reason_codes = Vec::new();

        for rule in &self.rules {
            if rule.triggers(expense, baseline) {
                suspicion_score += rule.weight();
                reason_codes.push(rule.code().to_string());
            }
        }

        ScoredExpense {
            expense: expense.clone(),
            suspicion_score,
            reason_codes,
            severity: Severity::from_score(suspicion_score),
        }
    }
}

impl Default for AnomalyScorer {
    fn default() -> Self {
        Self::new()
    }
}
