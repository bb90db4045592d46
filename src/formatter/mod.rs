//! Response body formatting.

pub mod json;

pub use json::{extract_message, format_value_pretty, DEFAULT_MESSAGE};

use std::fmt;

/// Errors that can occur during formatting.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// JSON parsing or formatting error.
    JsonError(String),

    /// UTF-8 encoding error.
    EncodingError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::JsonError(msg) => write!(f, "JSON formatting error: {}", msg),
            FormatError::EncodingError(msg) => write!(f, "Encoding error: {}", msg),
        }
    }
}

impl std::error::Error for FormatError {}
