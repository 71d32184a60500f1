//! Expense scoring rules
//!
//! This module provides the rule framework and the product's fixed rule
//! set for flagging statistically or behaviorally suspicious expenses.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      AnomalyScorer                          │
//! │  - Computes the batch baseline (mean / stddev) once         │
//! │  - Evaluates every rule against every expense               │
//! │  - Sums weights into a suspicion score + reason codes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Rule Trait                           │
//! │  - code(): Stable reason-code identifier                    │
//! │  - weight(): Points added when the rule fires               │
//! │  - description(): Human-readable description                │
//! │  - triggers(expense, baseline): Boolean predicate           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Rule set (evaluation order)
//!
//! - `statistical_outlier` (+30) - amount beyond 2 stddev of the batch mean
//! - `round_number` (+10) - suspiciously round amounts at or above 100
//! - `weekend_office` (+20) - office-supply claims dated Saturday/Sunday
//! - `threshold_gaming` (+25) - amounts parked just under an approval ceiling
//!
//! Rules are independent boolean predicates: each fires at most once per
//! expense, scores are additive, and `reason_codes` preserves this order.
//! The set is fixed by product policy, not a pluggable framework.

mod base;
mod engine;
mod round_number;
mod statistical_outlier;
mod threshold_gaming;
mod weekend_office;

pub use base::{default_rules, Rule};
pub use engine::AnomalyScorer;
pub use round_number::RoundNumber;
pub use statistical_outlier::StatisticalOutlier;
pub use threshold_gaming::ThresholdGaming;
pub use weekend_office::WeekendOffice;
