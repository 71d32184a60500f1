//! Core data models for Spendguard
//!
//! These models are used throughout the codebase for representing
//! expense records, scored results, and report envelopes.

use crate::baseline::AmountBaseline;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Severity buckets derived from the suspicion score.
///
/// The mapping is a fixed part of the scoring contract: every consumer
/// (dashboard KPIs, triage queues, CI gates) must bucket identically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
}

impl Severity {
    /// Score at or above which an expense is flagged for human review
    pub const FLAG_THRESHOLD: u32 = 40;

    /// Map a suspicion score to its severity bucket
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 60 => Severity::High,
            s if s >= Self::FLAG_THRESHOLD => Severity::Medium,
            _ => Severity::Low,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

/// One expense claim as submitted for review.
///
/// Owned by the caller's storage layer; scoring reads it and passes the
/// descriptive fields through untouched. Amounts and dates are decoded
/// leniently so one malformed record cannot abort a whole batch.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExpenseRecord {
    #[serde(default)]
    pub id: String,
    /// Claimed amount. Numeric strings are parsed; null, missing, or
    /// malformed values coerce to 0 (see [`crate::amount`]).
    #[serde(default, deserialize_with = "crate::amount::lenient")]
    pub amount: f64,
    /// Free-text category label, e.g. "office" or "travel"
    #[serde(default)]
    pub category: String,
    /// Date the expense occurred. Unparseable dates decode as `None`.
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Lenient date decoding: ISO dates and datetimes parse, everything else
/// (including non-string values) becomes `None` so date-based rules simply
/// do not apply.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(|v| v.as_str()).and_then(parse_date))
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    // Accept bare dates and RFC 3339 datetimes ("2024-03-02T09:30:00Z")
    let day = raw.trim().split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// An expense annotated with its suspicion score and reason codes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredExpense {
    #[serde(flatten)]
    pub expense: ExpenseRecord,
    /// Sum of the weights of every rule that fired (0 if none)
    pub suspicion_score: u32,
    /// Codes of the rules that fired, in rule evaluation order
    pub reason_codes: Vec<String>,
    /// Severity bucket for `suspicion_score`
    pub severity: Severity,
}

impl ScoredExpense {
    /// Whether this expense crosses the review threshold
    pub fn is_flagged(&self) -> bool {
        self.suspicion_score >= Severity::FLAG_THRESHOLD
    }
}

/// Summary of a scored batch by severity, plus the baseline it was scored
/// against. Drives the dashboard KPI row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringSummary {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub flagged: usize,
    pub total: usize,
    pub mean_amount: f64,
    pub std_dev_amount: f64,
}

impl ScoringSummary {
    pub fn from_scored(scored: &[ScoredExpense], baseline: &AmountBaseline) -> Self {
        let mut summary = Self {
            mean_amount: baseline.mean,
            std_dev_amount: baseline.std_dev,
            ..Self::default()
        };
        for s in scored {
            match s.severity {
                Severity::High => summary.high += 1,
                Severity::Medium => summary.medium += 1,
                Severity::Low => summary.low += 1,
            }
            if s.is_flagged() {
                summary.flagged += 1;
            }
            summary.total += 1;
        }
        summary
    }
}

/// Report envelope for one scoring run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyReport {
    /// Unique id for this scoring run
    pub report_id: String,
    /// When the report was generated (UTC)
    pub generated_at: DateTime<Utc>,
    pub summary: ScoringSummary,
    pub expenses: Vec<ScoredExpense>,
}

impl AnomalyReport {
    pub fn new(expenses: Vec<ScoredExpense>, baseline: &AmountBaseline) -> Self {
        Self {
            report_id: uuid::Uuid::new_v4().to_string(),
            generated_at: Utc::now(),
            summary: ScoringSummary::from_scored(&expenses, baseline),
            expenses,
        }
    }

    /// Copy of this report with only expenses at `min` severity or above.
    ///
    /// Display filter: the summary still reflects the full batch, matching
    /// how the dashboard keeps KPIs stable while the table is filtered.
    pub fn with_min_severity(&self, min: Severity) -> Self {
        Self {
            report_id: self.report_id.clone(),
            generated_at: self.generated_at,
            summary: self.summary.clone(),
            expenses: self
                .expenses
                .iter()
                .filter(|e| e.severity >= min)
                .cloned()
                .collect(),
        }
    }
}
