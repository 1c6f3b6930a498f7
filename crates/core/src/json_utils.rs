//! Lenient extraction helpers for vendor JSON.
//!
//! Vendor payloads are loosely typed: counts may arrive as numbers, strings
//! or null, and parameter lists are `[{"key": .., "value": ..}]` arrays that
//! may be absent. None of these helpers fail.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Renders a scalar as text. Null, arrays and objects become empty.
#[must_use]
pub fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Serde adapter for string fields that may arrive as null or as a number.
///
/// # Errors
/// Only when the input is not valid JSON.
pub fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Value::deserialize(deserializer).map(|value| scalar_to_string(&value))
}

/// Coerces a count-like value to a non-negative integer.
///
/// Integers pass through, floats truncate, numeric strings are parsed and
/// everything else (null, garbage, negatives) yields 0.
#[must_use]
pub fn coerce_count(value: &Value) -> u64 {
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                u
            } else if let Some(f) = n.as_f64() {
                float_to_count(f)
            } else {
                0
            }
        },
        Value::String(s) => {
            let trimmed = s.trim();
            if let Ok(i) = trimmed.parse::<i64>() {
                u64::try_from(i).unwrap_or(0)
            } else {
                trimmed.parse::<f64>().map_or(0, float_to_count)
            }
        },
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => 0,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, reason = "range checked")]
fn float_to_count(f: f64) -> u64 {
    if f.is_finite() && f >= 0.0 && f < u64::MAX as f64 {
        f.trunc() as u64
    } else {
        0
    }
}

/// Returns the value of the first `{"key": key, "value": ..}` entry.
///
/// A missing list, a non-list, or a missing key yields an empty string.
#[must_use]
pub fn get_kv(items: &Value, key: &str) -> String {
    let Some(entries) = items.as_array() else {
        return String::new();
    };
    entries
        .iter()
        .find(|entry| entry.get("key").and_then(Value::as_str) == Some(key))
        .and_then(|entry| entry.get("value"))
        .map(scalar_to_string)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_count_variants() {
        assert_eq!(coerce_count(&json!(7)), 7);
        assert_eq!(coerce_count(&json!(7.9)), 7);
        assert_eq!(coerce_count(&json!(" 12 ")), 12);
        assert_eq!(coerce_count(&json!("3.5")), 3);
        assert_eq!(coerce_count(&json!("n/a")), 0);
        assert_eq!(coerce_count(&json!(null)), 0);
        assert_eq!(coerce_count(&json!(-4)), 0);
        assert_eq!(coerce_count(&json!("-4")), 0);
        assert_eq!(coerce_count(&json!(true)), 0);
        assert_eq!(coerce_count(&json!([1])), 0);
    }

    #[test]
    fn test_get_kv_first_match_wins() {
        let params = json!([
            {"key": "SourceType", "value": "Email"},
            {"key": "SourceFileName", "value": "a.pdf"},
            {"key": "SourceFileName", "value": "b.pdf"}
        ]);
        assert_eq!(get_kv(&params, "SourceFileName"), "a.pdf");
        assert_eq!(get_kv(&params, "SourceType"), "Email");
    }

    #[test]
    fn test_get_kv_missing_key_or_list() {
        assert_eq!(get_kv(&json!([{"key": "Other", "value": "x"}]), "SourceFileName"), "");
        assert_eq!(get_kv(&Value::Null, "SourceFileName"), "");
        assert_eq!(get_kv(&json!({"key": "SourceFileName"}), "SourceFileName"), "");
        assert_eq!(get_kv(&json!(["SourceFileName"]), "SourceFileName"), "");
    }

    #[test]
    fn test_get_kv_non_string_value() {
        assert_eq!(get_kv(&json!([{"key": "Pages", "value": 3}]), "Pages"), "3");
        assert_eq!(get_kv(&json!([{"key": "App"}]), "App"), "");
    }
}
