//! Configuration schema for collection hooks.
//!
//! Defines the settings that control the injected headers and how the host
//! executes requests, together with validation.

use crate::hooks::{DEFAULT_USER_AGENT, TIMESTAMP_HEADER};
use reqwest::header::HeaderValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Collection settings, read from the `"collection"` key of a settings
/// document. Missing fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionConfig {
    /// Value of the `User-Agent` header set before every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Name of the header carrying the dispatch timestamp.
    ///
    /// Must be a non-empty token without whitespace or colons.
    #[serde(default = "default_timestamp_header")]
    pub timestamp_header: String,

    /// Request timeout in milliseconds. Must be greater than 0.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Whether to automatically follow HTTP redirects.
    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,

    /// Maximum number of redirects to follow when `follow_redirects` is set.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: u32,

    /// Headers added to every request before hooks run.
    ///
    /// Hooks run afterwards, so a `User-Agent` listed here is overridden.
    #[serde(default)]
    pub default_headers: HashMap<String, String>,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timestamp_header: default_timestamp_header(),
            timeout: default_timeout(),
            follow_redirects: default_follow_redirects(),
            max_redirects: default_max_redirects(),
            default_headers: HashMap::new(),
        }
    }
}

impl CollectionConfig {
    /// Validates the configuration and returns a descriptive error if any
    /// setting is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout == 0 {
            return Err("timeout must be greater than 0".to_string());
        }

        if !is_header_name(&self.timestamp_header) {
            return Err(format!(
                "timestampHeader is not a valid header name: {:?}",
                self.timestamp_header
            ));
        }

        if self.user_agent.trim().is_empty() {
            return Err("userAgent must not be empty".to_string());
        }

        if !is_header_value(&self.user_agent) {
            return Err(format!(
                "userAgent is not a valid header value: {:?}",
                self.user_agent
            ));
        }

        for (name, value) in &self.default_headers {
            if !is_header_name(name) {
                return Err(format!(
                    "defaultHeaders contains an invalid header name: {:?}",
                    name
                ));
            }
            if !is_header_value(value) {
                return Err(format!(
                    "defaultHeaders[{:?}] is not a valid header value: {:?}",
                    name, value
                ));
            }
        }

        Ok(())
    }
}

fn is_header_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_graphic() && b != b':')
}

fn is_header_value(value: &str) -> bool {
    HeaderValue::from_str(value).is_ok()
}

// Default value functions for serde

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timestamp_header() -> String {
    TIMESTAMP_HEADER.to_string()
}

fn default_timeout() -> u64 {
    30000 // 30 seconds in milliseconds
}

fn default_follow_redirects() -> bool {
    true
}

fn default_max_redirects() -> u32 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CollectionConfig::default();
        assert_eq!(config.user_agent, "Bruno-Auth-Service-Collection/1.0.0");
        assert_eq!(config.timestamp_header, "X-Request-Timestamp");
        assert_eq!(config.timeout, 30000);
        assert!(config.follow_redirects);
        assert_eq!(config.max_redirects, 10);
        assert!(config.default_headers.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: CollectionConfig =
            serde_json::from_str(r#"{"userAgent": "Orders/2.0", "maxRedirects": 0}"#).unwrap();
        assert_eq!(config.user_agent, "Orders/2.0");
        assert_eq!(config.max_redirects, 0);
        assert_eq!(config.timestamp_header, TIMESTAMP_HEADER);
        assert_eq!(config.timeout, 30000);
    }

    #[test]
    fn test_validate_timeout() {
        let mut config = CollectionConfig::default();
        config.timeout = 0;
        assert_eq!(
            config.validate().unwrap_err(),
            "timeout must be greater than 0"
        );
    }

    #[test]
    fn test_validate_header_names() {
        let mut config = CollectionConfig::default();
        config.timestamp_header = "X Request".to_string();
        assert!(config.validate().is_err());

        config.timestamp_header = "".to_string();
        assert!(config.validate().is_err());

        config.timestamp_header = "X-Sent-At".to_string();
        assert!(config.validate().is_ok());

        config
            .default_headers
            .insert("Bad:Name".to_string(), "v".to_string());
        assert!(config
            .validate()
            .unwrap_err()
            .contains("defaultHeaders"));
    }

    #[test]
    fn test_validate_user_agent() {
        let mut config = CollectionConfig::default();
        config.user_agent = "  ".to_string();
        assert!(config.validate().is_err());

        config.user_agent = "Agent\n1.0".to_string();
        assert!(config
            .validate()
            .unwrap_err()
            .starts_with("userAgent is not a valid header value"));

        config.user_agent = "Orders-Collection/2.0 (+https://example.com)".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_default_header_values() {
        let mut config = CollectionConfig::default();
        config
            .default_headers
            .insert("X-Tenant".to_string(), "acme\r\nX-Evil: 1".to_string());
        assert!(config
            .validate()
            .unwrap_err()
            .contains("not a valid header value"));
    }
}
