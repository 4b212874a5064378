//! Helpers over [`serde_json::Value`] documents: root parsing, uncoerced
//! path descent, defaulted scalar accessors, and linear array search.

pub mod emit;

use serde_json::Value;

use crate::error::ProtocolError;

/// Parses a request body into a JSON tree. Only object-rooted documents are
/// accepted; malformed bytes and non-object roots fail alike.
pub fn parse_document(data: &[u8]) -> Result<Value, ProtocolError> {
    let value: Value =
        serde_json::from_slice(data).map_err(|e| ProtocolError::InvalidJson(e.to_string()))?;
    if !value.is_object() {
        return Err(ProtocolError::InvalidJson(
            "document root is not an object".to_string(),
        ));
    }
    Ok(value)
}

/// Descends through object keys without coercion. Every step but the last
/// must resolve to an object; any miss yields `None`.
pub fn get_path<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let (last, rest) = keys.split_last()?;
    let mut current = value;
    for key in rest {
        current = current.as_object()?.get(*key)?;
    }
    current.as_object()?.get(*last)
}

/// Value at `key` narrowed to i16, or `default` when the key is absent or
/// not a number.
pub fn get_i16_or(value: &Value, key: &str, default: i16) -> i16 {
    match value.get(key) {
        Some(v) => number_to_i64(v).map(|n| n as i16).unwrap_or(default),
        None => default,
    }
}

/// Value at `key` narrowed to i32, or `default` when the key is absent or
/// not a number.
pub fn get_i32_or(value: &Value, key: &str, default: i32) -> i32 {
    match value.get(key) {
        Some(v) => number_to_i64(v).map(|n| n as i32).unwrap_or(default),
        None => default,
    }
}

/// String at `key`, or `default` when the key is absent or not a string.
pub fn get_str_or<'a>(value: &'a Value, key: &str, default: &'a str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or(default)
}

/// First object in `array` whose `field` equals `value`.
pub fn find_by_field<'a>(array: &'a [Value], field: &str, value: &str) -> Option<&'a Value> {
    array
        .iter()
        .find(|entry| entry.get(field).and_then(Value::as_str) == Some(value))
}

/// Integer view of a JSON number. Integer tokens are taken exactly; float
/// tokens are truncated, so exactness is lost above 2^53 only for values
/// that were written as floats.
pub(crate) fn number_to_i64(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    value.as_f64().map(|f| f as i64)
}
