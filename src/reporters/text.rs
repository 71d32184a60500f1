//! Text (terminal) reporter with colors and formatting

use crate::models::{AnomalyReport, ScoredExpense, Severity};
use anyhow::Result;

/// Severity colors (ANSI escape codes)
fn severity_color(severity: &Severity) -> &'static str {
    match severity {
        Severity::High => "\x1b[31m",   // Red
        Severity::Medium => "\x1b[33m", // Yellow
        Severity::Low => "\x1b[34m",    // Blue
    }
}

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Severity tag
fn severity_tag(severity: &Severity) -> &'static str {
    match severity {
        Severity::High => "[H]",
        Severity::Medium => "[M]",
        Severity::Low => "[L]",
    }
}

/// Render report as formatted terminal output
pub fn render(report: &AnomalyReport) -> Result<String> {
    let mut out = String::new();
    let summary = &report.summary;

    // Header
    out.push_str(&format!("\n{BOLD}Spendguard Anomaly Report{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Expenses: {}  Flagged: {BOLD}{}{RESET}  Baseline: mean {:.2} / stddev {:.2}\n\n",
        summary.total, summary.flagged, summary.mean_amount, summary.std_dev_amount
    ));

    // Severity summary
    let mut summary_parts = Vec::new();
    if summary.high > 0 {
        summary_parts.push(format!("\x1b[31m{} high{RESET}", summary.high));
    }
    if summary.medium > 0 {
        summary_parts.push(format!("\x1b[33m{} medium{RESET}", summary.medium));
    }
    if summary.low > 0 {
        summary_parts.push(format!("\x1b[34m{} low{RESET}", summary.low));
    }
    if !summary_parts.is_empty() {
        out.push_str(&format!("{BOLD}SEVERITY{RESET}\n"));
        out.push_str(&format!("  {}\n\n", summary_parts.join(" | ")));
    }

    // Top expenses by score. Display-only sort: the report data itself
    // stays in submission order.
    let mut by_score: Vec<&ScoredExpense> = report.expenses.iter().collect();
    by_score.sort_by(|a, b| b.suspicion_score.cmp(&a.suspicion_score));

    if summary.flagged == 0 {
        out.push_str(&format!(
            "{DIM}No expenses crossed the review threshold.{RESET}\n"
        ));
        return Ok(out);
    }

    out.push_str(&format!(
        "{DIM}  #   SCORE  SEV      AMOUNT  CATEGORY      REASONS{RESET}\n"
    ));
    out.push_str(&format!(
        "{DIM}  ─────────────────────────────────────────────────────────────────{RESET}\n"
    ));

    for (i, scored) in by_score.iter().filter(|s| s.is_flagged()).take(10).enumerate() {
        let sev_c = severity_color(&scored.severity);
        let sev_tag = severity_tag(&scored.severity);

        // Truncate long category labels — use chars() to stay UTF-8 safe
        let category: String = scored.expense.category.chars().take(12).collect();

        out.push_str(&format!(
            "  {DIM}{:>3}{RESET}  {:>5}  {sev_c}{}{RESET}  {:>10.2}  {:<12}  {DIM}{}{RESET}\n",
            i + 1,
            scored.suspicion_score,
            sev_tag,
            scored.expense.amount,
            category,
            scored.reason_codes.join(", ")
        ));
    }

    let remaining = summary.flagged.saturating_sub(10);
    if remaining > 0 {
        out.push_str(&format!(
            "\n  {DIM}...and {} more flagged (use --format json for the full set){RESET}\n",
            remaining
        ));
    }
    out.push('\n');
    out.push_str(&format!(
        "{DIM}Scores are advisory; review flagged claims before acting.{RESET}\n"
    ));

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_text_render_contains_summary() {
        let rendered = render(&test_report()).expect("render text");
        assert!(rendered.contains("Spendguard Anomaly Report"));
        assert!(rendered.contains("Expenses: 2"));
        assert!(rendered.contains("Flagged:"));
    }

    #[test]
    fn test_text_render_lists_flagged_rows() {
        let rendered = render(&test_report()).expect("render text");
        assert!(rendered.contains("weekend_office, threshold_gaming"));
        assert!(rendered.contains("[M]"));
    }

    #[test]
    fn test_text_render_quiet_batch() {
        let mut report = test_report();
        report.expenses.retain(|e| !e.is_flagged());
        report.summary.flagged = 0;
        let rendered = render(&report).expect("render text");
        assert!(rendered.contains("No expenses crossed the review threshold"));
    }
}
