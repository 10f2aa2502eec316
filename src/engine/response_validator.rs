//! Shape checks for review API payloads.

use serde_json::Value;
use thiserror::Error;

/// Key holding the submissions list.
pub const SUBMISSIONS_KEY: &str = "homeworks";

/// Key holding the lower bound of the next poll.
pub const CURRENT_DATE_KEY: &str = "current_date";

/// A payload that cannot be turned into a list of submissions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResponseError {
    /// The payload does not have the documented shape.
    #[error("Некорректный ответ API: {0}")]
    Malformed(String),

    /// Well-formed, but the API had nothing to say.
    #[error("Ответ API пришёл пустой")]
    Empty,
}

pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

/// Returns the raw submission entries, newest first, exactly as the API
/// ordered them.
///
/// Entries are not inspected here: only the newest one is ever decoded.
pub fn extract_submissions(response: &Value) -> Result<&[Value], ResponseError> {
    let Value::Object(map) = response else {
        return Err(ResponseError::Malformed(format!(
            "expected an object, got {}",
            kind(response)
        )));
    };

    match map.get(SUBMISSIONS_KEY) {
        None => Err(ResponseError::Empty),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(ResponseError::Malformed(format!(
            "'{SUBMISSIONS_KEY}' is a {}, not a list",
            kind(other)
        ))),
    }
}

/// Reads the integer `current_date` the next poll should start from.
pub fn next_poll_timestamp(response: &Value) -> Option<i64> {
    response.get(CURRENT_DATE_KEY).and_then(Value::as_i64)
}
