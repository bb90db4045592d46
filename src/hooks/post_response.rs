//! Post-response hook: report status and outcome.

use crate::console::Console;
use crate::formatter::{extract_message, format_value_pretty};
use crate::hooks::PostResponseHook;
use crate::models::HttpResponse;
use std::sync::Arc;

/// Logs the status line, then either the pretty-printed error body or the
/// body's `message` field.
pub struct CollectionPostResponse {
    console: Arc<dyn Console>,
}

impl CollectionPostResponse {
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self { console }
    }
}

impl PostResponseHook for CollectionPostResponse {
    fn after_response(&self, response: &HttpResponse) {
        let status = response.get_status();
        self.console.log(&format!(
            "📨 Response: {} - {}",
            status,
            response.get_status_text()
        ));

        let body = response.get_body();
        if response.is_error() {
            // Serializing a `Value` cannot fail; fall back to compact form anyway.
            let rendered = format_value_pretty(&body).unwrap_or_else(|_| body.to_string());
            self.console.error(&format!("❌ Error {}: {}", status, rendered));
        } else {
            self.console.log(&format!("✅ Success: {}", extract_message(&body)));
        }
    }
}
