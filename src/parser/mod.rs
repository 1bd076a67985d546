use serde_json::{Map, Value};

/// Decoded key-value view of one log line
pub type Record = Map<String, Value>;

/// Well-known field names in access-log records
pub const URL_KEY: &str = "url";
pub const RESPONSE_TIME_KEY: &str = "response_time";
pub const STATUS_KEY: &str = "status";
pub const USER_AGENT_KEY: &str = "http_user_agent";
pub const TIMESTAMP_KEY: &str = "@timestamp";

/// Best-effort decode of a raw line into a record.
///
/// Returns `None` for malformed JSON and for valid JSON that is not an object
/// (arrays, strings, numbers, ...). Callers treat `None` as "skip this line".
pub fn parse_record(line: &str) -> Option<Record> {
    match serde_json::from_str::<Value>(line.trim()) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

// Field helpers shared by the loader and the reports
pub mod json;

pub use json::{coerce_number, date_portion, is_truthy, value_to_text};
