//! Amount coercion at the input boundary
//!
//! The upstream storage layer is loosely typed: amounts arrive as numbers,
//! numeric strings, nulls, or garbage. Scoring only ever sees a validated
//! `f64`. Coercion policy: non-numeric, missing, NaN, non-finite, and
//! negative values all become 0 — for the baseline AND for rule evaluation —
//! so one bad record cannot abort scoring of an entire batch.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Clamp a raw amount to the non-negative finite domain scoring operates on
pub fn sanitize(raw: f64) -> f64 {
    if raw.is_finite() && raw >= 0.0 {
        raw
    } else {
        0.0
    }
}

/// Coerce an arbitrary JSON value to an amount
pub fn coerce(raw: &Value) -> f64 {
    let parsed = match raw {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    sanitize(parsed)
}

/// Serde hook used by `ExpenseRecord::amount`
pub fn lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce(&value))
}
