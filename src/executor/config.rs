//! HTTP request execution configuration.

use crate::config::CollectionConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Parameters controlling how the host dispatches requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,

    /// Whether to follow 3xx redirects.
    pub follow_redirects: bool,

    /// Redirect limit when following is enabled.
    pub max_redirects: u32,

    /// Headers applied to every request before pre-request hooks run.
    pub default_headers: HashMap<String, String>,
}

impl ExecutionConfig {
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl From<&CollectionConfig> for ExecutionConfig {
    fn from(config: &CollectionConfig) -> Self {
        Self {
            timeout_ms: config.timeout,
            follow_redirects: config.follow_redirects,
            max_redirects: config.max_redirects,
            default_headers: config.default_headers.clone(),
        }
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self::from(&CollectionConfig::default())
    }
}
