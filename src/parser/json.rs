// src/parser/json.rs - value helpers for loosely-typed record fields

use serde_json::Value;

/// Presence check used for `url`, `http_user_agent` and `@timestamp`.
/// Null, false, zero and empty strings/arrays/objects count as absent.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(arr) => !arr.is_empty(),
        Value::Object(obj) => !obj.is_empty(),
    }
}

/// Text form of a field value, so `200` and `"200"` end up as the same key
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        // Containers are rare here; compact JSON keeps them distinguishable
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Numeric coercion for `response_time`. Numbers pass through, strings are
/// parsed after trimming, anything else is a coercion failure.
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Date part of an ISO-8601 timestamp: everything before the first `T`
pub fn date_portion(timestamp: &str) -> &str {
    timestamp
        .split_once('T')
        .map_or(timestamp, |(date, _)| date)
}
