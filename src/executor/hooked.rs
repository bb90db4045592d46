//! Host that runs a hook chain around request execution.

use crate::config::CollectionConfig;
use crate::console::Console;
use crate::executor::config::ExecutionConfig;
use crate::executor::error::RequestError;
use crate::executor::native::execute_request;
use crate::hooks::HookChain;
use crate::models::{HttpRequest, HttpResponse};
use std::sync::Arc;

/// Executes requests with pre-request and post-response hooks applied.
///
/// For each request: default headers are added, pre-request hooks run on
/// the request, the request is dispatched, and post-response hooks run on
/// the response. Post-response hooks are skipped when dispatch fails.
#[derive(Debug, Clone)]
pub struct HookedExecutor {
    chain: Arc<HookChain>,
    config: ExecutionConfig,
}

impl HookedExecutor {
    pub fn new(chain: HookChain, config: ExecutionConfig) -> Self {
        Self {
            chain: Arc::new(chain),
            config,
        }
    }

    /// Builds an executor running the collection hooks configured by
    /// `config`.
    pub fn collection(config: &CollectionConfig, console: Arc<dyn Console>) -> Self {
        Self::new(
            HookChain::collection(config, console),
            ExecutionConfig::from(config),
        )
    }

    pub fn config(&self) -> &ExecutionConfig {
        &self.config
    }

    /// Applies default headers and runs pre-request hooks, returning the
    /// request that would be dispatched.
    pub fn prepare(&self, mut request: HttpRequest) -> HttpRequest {
        for (name, value) in &self.config.default_headers {
            if request.get_header(name).is_none() {
                request.set_header(name.as_str(), value.as_str());
            }
        }

        self.chain.run_pre_request(&mut request);
        request
    }

    /// Prepares, dispatches and reports a request.
    pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse, RequestError> {
        let request = self.prepare(request);

        let response = match execute_request(&request, &self.config).await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("[{}] {} {} failed: {}", request.id, request.method, request.url, e);
                return Err(e);
            }
        };

        self.chain.run_post_response(&response);
        Ok(response)
    }
}
