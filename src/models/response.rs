//! HTTP response data models.
//!
//! This module defines the response object handed to post-response hooks.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

/// Represents an HTTP response received from a server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpResponse {
    /// HTTP status code (e.g., 200, 404, 500).
    pub status_code: u16,

    /// HTTP status text (e.g., "OK", "Not Found").
    pub status_text: String,

    /// Response headers as key-value pairs.
    pub headers: HashMap<String, String>,

    /// Response body as raw bytes.
    ///
    /// Kept as bytes so binary responses survive; `get_body` decodes it.
    pub body: Vec<u8>,

    /// Total request duration from dispatch to last body byte.
    pub duration: Duration,

    /// Total response size in bytes, headers included.
    pub size: usize,
}

impl HttpResponse {
    /// Creates a new HttpResponse with the given status code and text.
    ///
    /// # Arguments
    ///
    /// * `status_code` - HTTP status code
    /// * `status_text` - HTTP status text description
    pub fn new(status_code: u16, status_text: String) -> Self {
        Self {
            status_code,
            status_text,
            headers: HashMap::new(),
            body: Vec::new(),
            duration: Duration::from_secs(0),
            size: 0,
        }
    }

    /// Returns the status code.
    pub fn get_status(&self) -> u16 {
        self.status_code
    }

    /// Returns the status text.
    pub fn get_status_text(&self) -> &str {
        &self.status_text
    }

    /// Returns the body as a JSON value.
    ///
    /// A body that parses as JSON is returned parsed. Any other body is
    /// returned as a JSON string holding its (lossily decoded) text, and an
    /// empty body is `Value::Null`.
    pub fn get_body(&self) -> Value {
        if self.body.iter().all(|b| b.is_ascii_whitespace()) {
            return Value::Null;
        }

        match serde_json::from_slice::<Value>(&self.body) {
            Ok(value) => value,
            Err(_) => Value::String(String::from_utf8_lossy(&self.body).into_owned()),
        }
    }

    /// Checks if the status is 400 or above.
    pub fn is_error(&self) -> bool {
        self.status_code >= 400
    }

    /// Adds a header to the response.
    pub fn add_header(&mut self, name: String, value: String) {
        self.headers.insert(name, value);
    }

    /// Sets the response body and recomputes the size.
    pub fn set_body(&mut self, body: Vec<u8>) {
        self.size = self.calculate_headers_size() + body.len();
        self.body = body;
    }

    fn calculate_headers_size(&self) -> usize {
        self.headers
            .iter()
            .map(|(k, v)| k.len() + v.len() + 4) // +4 for ": " and "\r\n"
            .sum()
    }
}
