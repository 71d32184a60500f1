//! CLI command definitions and handlers

use crate::baseline::AmountBaseline;
use crate::config::AppConfig;
use crate::input;
use crate::models::{AnomalyReport, Severity};
use crate::reporters;
use crate::rules::AnomalyScorer;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

/// Spendguard - rule-based expense anomaly scoring
#[derive(Parser, Debug)]
#[command(name = "spendguard")]
#[command(
    version,
    about = "Score expense batches for fraud review — statistical outliers, round-number claims, weekend office spend, threshold gaming",
    after_help = "\
Examples:
  spendguard score expenses.json                 Score a batch, print a terminal report
  spendguard score expenses.json --format json   JSON envelope for dashboards
  spendguard score - < expenses.json             Read the batch from stdin
  spendguard score expenses.json --fail-on high  Exit 1 on any high-severity claim (CI gate)
  spendguard score expenses.json --min-severity medium   Hide low-severity rows
  spendguard rules                               Show the rule catalog"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a batch of expenses (JSON array of records) and render a report
    #[command(after_help = "\
Examples:
  spendguard score expenses.json                 Terminal report
  spendguard score expenses.json -f json -o report.json   Write JSON to a file
  spendguard score - --fail-on medium            Gate a pipeline on flagged claims")]
    Score {
        /// Input file, or `-` for stdin
        input: PathBuf,

        /// Output format: text, json
        #[arg(long, short = 'f', value_parser = ["text", "json"])]
        format: Option<String>,

        /// Minimum severity to display (display filter; summary stays full)
        #[arg(long, value_parser = ["low", "medium", "high"])]
        min_severity: Option<String>,

        /// Exit with code 1 if any expense reaches this severity
        #[arg(long, value_parser = ["low", "medium", "high"])]
        fail_on: Option<String>,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Config file path (default: ./spendguard.toml)
        #[arg(long, env = "SPENDGUARD_CONFIG")]
        config: Option<PathBuf>,
    },

    /// List the scoring rules (code, weight, description)
    Rules {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Score {
            input,
            format,
            min_severity,
            fail_on,
            output,
            config,
        } => run_score(input, format, min_severity, fail_on, output, config),
        Commands::Rules { json } => run_rules(json),
    }
}

fn run_score(
    input: PathBuf,
    format: Option<String>,
    min_severity: Option<String>,
    fail_on: Option<String>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref());

    let expenses = input::load_expenses(&input)
        .with_context(|| format!("failed to load expense batch from {}", input.display()))?;
    info!("loaded {} expenses from {}", expenses.len(), input.display());

    let baseline = AmountBaseline::compute(&expenses);
    let scored = AnomalyScorer::new().score(&expenses);
    let report = AnomalyReport::new(scored, &baseline);

    let format = format.unwrap_or_else(|| config.report.format.clone());
    let min_severity = min_severity.or_else(|| config.report.min_severity.clone());
    let fail_on = fail_on.or_else(|| config.report.fail_on.clone());

    let display = match min_severity.as_deref() {
        Some(s) => report.with_min_severity(parse_severity(s)),
        None => report.clone(),
    };

    let rendered = reporters::report(&display, &format)?;
    match output {
        Some(path) => {
            std::fs::write(&path, &rendered)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            info!("report written to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    // The gate looks at the full scored batch, not the display filter
    if let Some(s) = fail_on.as_deref() {
        let gate = parse_severity(s);
        if report.expenses.iter().any(|e| e.severity >= gate) {
            std::process::exit(1);
        }
    }

    Ok(())
}

fn run_rules(json: bool) -> Result<()> {
    let scorer = AnomalyScorer::new();
    if json {
        let catalog: Vec<_> = scorer
            .rules()
            .iter()
            .map(|r| {
                serde_json::json!({
                    "code": r.code(),
                    "weight": r.weight(),
                    "description": r.description(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&catalog)?);
    } else {
        println!("{:<22} {:>6}  DESCRIPTION", "CODE", "WEIGHT");
        for rule in scorer.rules() {
            println!(
                "{:<22} {:>6}  {}",
                rule.code(),
                rule.weight(),
                rule.description()
            );
        }
    }
    Ok(())
}

/// Map a CLI severity string (pre-validated by clap) to the enum
fn parse_severity(s: &str) -> Severity {
    match s {
        "high" => Severity::High,
        "medium" => Severity::Medium,
        _ => Severity::Low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_severity() {
        assert_eq!(parse_severity("high"), Severity::High);
        assert_eq!(parse_severity("medium"), Severity::Medium);
        assert_eq!(parse_severity("low"), Severity::Low);
    }

    #[test]
    fn test_cli_parses_score_flags() {
        let cli = Cli::try_parse_from([
            "spendguard",
            "score",
            "expenses.json",
            "--format",
            "json",
            "--fail-on",
            "high",
        ])
        .expect("parse args");
        match cli.command {
            Commands::Score {
                input,
                format,
                fail_on,
                ..
            } => {
                assert_eq!(input, PathBuf::from("expenses.json"));
                assert_eq!(format.as_deref(), Some("json"));
                assert_eq!(fail_on.as_deref(), Some("high"));
            }
            _ => panic!("expected score command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["spendguard", "score", "a.json", "--format", "csv"]).is_err());
    }

    #[test]
    fn test_cli_parses_rules_command() {
        let cli = Cli::try_parse_from(["spendguard", "rules", "--json"]).expect("parse args");
        assert!(matches!(cli.command, Commands::Rules { json: true }));
    }
}
