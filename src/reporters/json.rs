//! JSON reporter
//!
//! Outputs the full AnomalyReport as pretty-printed JSON.
//! Useful for machine consumption, piping to jq, or feeding the dashboard.

use crate::models::AnomalyReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &AnomalyReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render report as compact JSON (single line)
#[allow(dead_code)] // Public API helper
pub fn render_compact(report: &AnomalyReport) -> Result<String> {
    Ok(serde_json::to_string(report)?)
}
