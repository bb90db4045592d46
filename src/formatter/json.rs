//! JSON rendering for hook output.
//!
//! Pretty-printing uses 2-space indentation so error bodies read the same
//! way they do in a browser console.

use crate::formatter::FormatError;
use serde::Serialize;
use serde_json::Value;

/// Fallback shown when a response carries no usable `message` field.
pub const DEFAULT_MESSAGE: &str = "OK";

/// Formats a JSON value with 2-space indentation.
///
/// # Examples
///
/// ```
/// use collection_hooks::formatter::json::format_value_pretty;
/// use serde_json::json;
///
/// let formatted = format_value_pretty(&json!({"error": "not found"})).unwrap();
/// assert_eq!(formatted, "{\n  \"error\": \"not found\"\n}");
/// ```
pub fn format_value_pretty(value: &Value) -> Result<String, FormatError> {
    let mut buf = Vec::with_capacity(128);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"  ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);

    value
        .serialize(&mut serializer)
        .map_err(|e| FormatError::JsonError(e.to_string()))?;

    String::from_utf8(buf).map_err(|e| FormatError::EncodingError(e.to_string()))
}

/// Extracts the `message` field of a response body for display.
///
/// Falsy values (`null`, `false`, `0`, `""`) and missing fields yield
/// [`DEFAULT_MESSAGE`]. Strings are returned verbatim, other scalars in
/// their JSON text form, and objects or arrays compactly serialized.
pub fn extract_message(body: &Value) -> String {
    let message = match body.get("message") {
        Some(m) => m,
        None => return DEFAULT_MESSAGE.to_string(),
    };

    match message {
        Value::Null | Value::Bool(false) => DEFAULT_MESSAGE.to_string(),
        Value::String(s) if s.is_empty() => DEFAULT_MESSAGE.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) if n.as_f64() == Some(0.0) => DEFAULT_MESSAGE.to_string(),
        other => other.to_string(),
    }
}
