//! HTTP request data models.
//!
//! This module defines the request object handed to hooks: method, URL,
//! headers and body, plus the accessor and mutator operations hooks rely on.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// HTTP request method.
///
/// Represents all standard HTTP methods as defined in RFC 7231 and RFC 5789.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    /// HTTP GET method - retrieve a resource
    GET,
    /// HTTP POST method - submit data to create a resource
    POST,
    /// HTTP PUT method - replace a resource
    PUT,
    /// HTTP DELETE method - remove a resource
    DELETE,
    /// HTTP PATCH method - partially modify a resource
    PATCH,
    /// HTTP OPTIONS method - describe communication options
    OPTIONS,
    /// HTTP HEAD method - retrieve headers only
    HEAD,
    /// HTTP TRACE method - perform a message loop-back test
    TRACE,
    /// HTTP CONNECT method - establish a tunnel to the server
    CONNECT,
}

impl HttpMethod {
    /// Returns the string representation of the HTTP method.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::OPTIONS => "OPTIONS",
            HttpMethod::HEAD => "HEAD",
            HttpMethod::TRACE => "TRACE",
            HttpMethod::CONNECT => "CONNECT",
        }
    }

    /// Parses a method name, ignoring case.
    ///
    /// Returns `None` for anything that is not a standard method.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "GET" => Some(HttpMethod::GET),
            "POST" => Some(HttpMethod::POST),
            "PUT" => Some(HttpMethod::PUT),
            "DELETE" => Some(HttpMethod::DELETE),
            "PATCH" => Some(HttpMethod::PATCH),
            "OPTIONS" => Some(HttpMethod::OPTIONS),
            "HEAD" => Some(HttpMethod::HEAD),
            "TRACE" => Some(HttpMethod::TRACE),
            "CONNECT" => Some(HttpMethod::CONNECT),
            _ => None,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An outgoing HTTP request as seen by hooks.
///
/// Hooks only read the method and URL and mutate headers; the host owns the
/// value and dispatches it after every pre-request hook has run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpRequest {
    /// Unique identifier used to correlate log lines with responses.
    pub id: String,

    /// HTTP method (GET, POST, PUT, DELETE, etc.).
    pub method: HttpMethod,

    /// Target URL for the request.
    pub url: String,

    /// Request headers as key-value pairs.
    ///
    /// Names keep the casing they were set with; lookups and replacement
    /// are case-insensitive.
    pub headers: HashMap<String, String>,

    /// Optional raw request body.
    pub body: Option<String>,
}

impl HttpRequest {
    /// Creates a request with no headers and no body.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier for the request
    /// * `method` - HTTP method
    /// * `url` - Target URL
    pub fn new(id: String, method: HttpMethod, url: String) -> Self {
        Self {
            id,
            method,
            url,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Creates a request with a freshly generated v4 UUID as its id.
    pub fn with_generated_id(method: HttpMethod, url: impl Into<String>) -> Self {
        Self::new(uuid::Uuid::new_v4().to_string(), method, url.into())
    }

    /// Returns the request method.
    pub fn get_method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the request URL.
    pub fn get_url(&self) -> &str {
        &self.url
    }

    /// Sets a header, replacing any existing header with the same name
    /// regardless of casing.
    ///
    /// # Arguments
    ///
    /// * `name` - Header name, stored as given
    /// * `value` - Header value
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.headers.retain(|k, _| !k.eq_ignore_ascii_case(&name));
        self.headers.insert(name, value.into());
    }

    /// Looks up a header value by name, ignoring case.
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Sets the request body.
    pub fn set_body(&mut self, body: String) {
        self.body = Some(body);
    }
}
