//! Batch input loading
//!
//! Expense batches arrive as a JSON array of records, from a file or from
//! stdin (`-`). Malformed *fields* are coerced at decode time (see
//! [`crate::amount`]); a structurally invalid document is a typed error
//! for the caller to surface.

use crate::models::ExpenseRecord;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read expense batch: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode expense batch: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load a batch from a file path, or stdin when the path is `-`
pub fn load_expenses(path: &Path) -> Result<Vec<ExpenseRecord>, InputError> {
    if path.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        parse_expenses(&raw)
    } else {
        parse_expenses(&std::fs::read_to_string(path)?)
    }
}

/// Decode a JSON array of expense records
pub fn parse_expenses(raw: &str) -> Result<Vec<ExpenseRecord>, InputError> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_amount_types() {
        let raw = r#"[
            {"id": "e1", "amount": 125.5, "category": "travel"},
            {"id": "e2", "amount": "999", "category": "office"},
            {"id": "e3", "amount": null, "category": "meals"}
        ]"#;
        let batch = parse_expenses(raw).expect("parse batch");
        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0].amount, 125.5);
        assert_eq!(batch[1].amount, 999.0);
        assert_eq!(batch[2].amount, 0.0);
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let raw = r#"[{"id": "e1", "amount": 10, "category": "misc", "org_id": "acme", "receipt_url": "x"}]"#;
        let batch = parse_expenses(raw).expect("parse batch");
        assert_eq!(batch[0].id, "e1");
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_expenses("[]").expect("parse batch").is_empty());
    }

    #[test]
    fn test_parse_rejects_non_array_documents() {
        assert!(matches!(
            parse_expenses(r#"{"expenses": []}"#),
            Err(InputError::Json(_))
        ));
        assert!(matches!(parse_expenses("not json"), Err(InputError::Json(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("batch.json");
        std::fs::write(&path, r#"[{"id": "e1", "amount": 42}]"#).expect("write fixture");
        let batch = load_expenses(&path).expect("load batch");
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].amount, 42.0);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_expenses(Path::new("/nonexistent/batch.json")).unwrap_err();
        assert!(matches!(err, InputError::Io(_)));
    }
}
