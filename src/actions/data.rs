//! The structured map actions are loaded from and serialized to.

use serde_json::{Map, Value};

/// String-keyed action fields, as stored in project files and clipboard payloads.
///
/// Unknown keys are ignored when loading, optional keys are left out when at their default.
pub type ActionData = Map<String, Value>;

/// The string stored under `key`, if it is one.
pub(crate) fn string<'a>(data: &'a ActionData, key: &str) -> Option<&'a str> {
    data.get(key)?.as_str()
}

/// The bool stored under `key`, if it is one.
pub(crate) fn boolean(data: &ActionData, key: &str) -> Option<bool> {
    data.get(key)?.as_bool()
}

/// The value under `key` converted to an `i32`: integers, floats (truncated), numeric
/// strings and bools convert, anything else (or an out of range value) does not.
pub(crate) fn integer(data: &ActionData, key: &str) -> Option<i32> {
    match data.get(key)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .and_then(|v| i32::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(i32::from(*b)),
        _ => None,
    }
}
