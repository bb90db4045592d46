//! Request lifecycle hooks.
//!
//! A host runs every [`PreRequestHook`] on the outgoing request right before
//! dispatch and every [`PostResponseHook`] on the response right after it
//! arrives. Hooks are synchronous, infallible and keep no state between
//! invocations.
//!
//! The collection ships two hooks:
//!
//! - [`CollectionPreRequest`] logs `METHOD URL` and sets the
//!   `X-Request-Timestamp` and `User-Agent` headers
//! - [`CollectionPostResponse`] logs the status line and an error or
//!   success line depending on the status code

pub mod clock;
pub mod post_response;
pub mod pre_request;

pub use clock::{Clock, FixedClock, SystemClock};
pub use post_response::CollectionPostResponse;
pub use pre_request::{
    CollectionPreRequest, DEFAULT_USER_AGENT, TIMESTAMP_HEADER, USER_AGENT_HEADER,
};

use crate::config::CollectionConfig;
use crate::console::Console;
use crate::models::{HttpRequest, HttpResponse};
use std::sync::Arc;

/// Hook called before the request is sent.
pub trait PreRequestHook: Send + Sync {
    /// Inspect the request and mutate its headers in place.
    fn before_request(&self, request: &mut HttpRequest);
}

/// Hook called once the full response has been received.
pub trait PostResponseHook: Send + Sync {
    fn after_response(&self, response: &HttpResponse);
}

/// Ordered set of hooks run around each request.
#[derive(Default, Clone)]
pub struct HookChain {
    pre_request: Vec<Arc<dyn PreRequestHook>>,
    post_response: Vec<Arc<dyn PostResponseHook>>,
}

impl HookChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the chain holding the collection's two hooks.
    pub fn collection(config: &CollectionConfig, console: Arc<dyn Console>) -> Self {
        Self::new()
            .with_pre_request(CollectionPreRequest::from_config(config, console.clone()))
            .with_post_response(CollectionPostResponse::new(console))
    }

    pub fn with_pre_request(mut self, hook: impl PreRequestHook + 'static) -> Self {
        self.pre_request.push(Arc::new(hook));
        self
    }

    pub fn with_post_response(mut self, hook: impl PostResponseHook + 'static) -> Self {
        self.post_response.push(Arc::new(hook));
        self
    }

    /// Runs pre-request hooks in registration order.
    pub fn run_pre_request(&self, request: &mut HttpRequest) {
        for hook in &self.pre_request {
            hook.before_request(request);
        }
    }

    /// Runs post-response hooks in registration order.
    pub fn run_post_response(&self, response: &HttpResponse) {
        for hook in &self.post_response {
            hook.after_response(response);
        }
    }

    pub fn len(&self) -> usize {
        self.pre_request.len() + self.post_response.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for HookChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookChain")
            .field("pre_request", &self.pre_request.len())
            .field("post_response", &self.post_response.len())
            .finish()
    }
}
