//! Pre-request hook: announce the request and stamp it.

use crate::config::CollectionConfig;
use crate::console::Console;
use crate::hooks::clock::{iso8601_millis, Clock, SystemClock};
use crate::hooks::PreRequestHook;
use crate::models::HttpRequest;
use std::sync::Arc;

/// Header carrying the dispatch time.
pub const TIMESTAMP_HEADER: &str = "X-Request-Timestamp";

/// Header carrying the collection's user agent.
pub const USER_AGENT_HEADER: &str = "User-Agent";

/// User agent sent with every collection request.
pub const DEFAULT_USER_AGENT: &str = "Bruno-Auth-Service-Collection/1.0.0";

/// Logs the method and URL, then sets the timestamp and user-agent headers.
pub struct CollectionPreRequest {
    console: Arc<dyn Console>,
    clock: Arc<dyn Clock>,
    timestamp_header: String,
    user_agent: String,
}

impl CollectionPreRequest {
    /// Creates the hook with the default header name and user agent.
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self {
            console,
            clock: Arc::new(SystemClock),
            timestamp_header: TIMESTAMP_HEADER.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Creates the hook using the header name and user agent from `config`.
    pub fn from_config(config: &CollectionConfig, console: Arc<dyn Console>) -> Self {
        Self {
            console,
            clock: Arc::new(SystemClock),
            timestamp_header: config.timestamp_header.clone(),
            user_agent: config.user_agent.clone(),
        }
    }

    /// Replaces the time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn timestamp_header(&self) -> &str {
        &self.timestamp_header
    }
}

impl PreRequestHook for CollectionPreRequest {
    fn before_request(&self, request: &mut HttpRequest) {
        self.console.log(&format!(
            "🚀 Executing: {} {}",
            request.get_method(),
            request.get_url()
        ));

        request.set_header(
            self.timestamp_header.as_str(),
            iso8601_millis(self.clock.now()),
        );
        request.set_header(USER_AGENT_HEADER, self.user_agent.as_str());
    }
}
