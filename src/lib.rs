//! Collection hooks for API testing
//!
//! This crate provides the pre-request and post-response hooks of an API
//! testing collection, plus a small host that runs them around real HTTP
//! requests.
//!
//! # Architecture
//!
//! - **models**: Request and response objects handed to hooks
//! - **hooks**: Hook traits, the collection's two hooks and the hook chain
//! - **console**: Output sink for hook diagnostics
//! - **formatter**: JSON pretty-printing and message extraction
//! - **executor**: reqwest-based execution and the hooked host
//! - **config**: Collection settings and the global configuration
//!
//! # Hook behaviour
//!
//! Before dispatch the pre-request hook logs `🚀 Executing: METHOD URL`,
//! sets `X-Request-Timestamp` to the current ISO-8601 time and sets
//! `User-Agent` to `Bruno-Auth-Service-Collection/1.0.0`.
//!
//! After receipt the post-response hook logs `📨 Response: CODE - TEXT`,
//! then for status >= 400 an error line with the pretty-printed body,
//! otherwise a success line with the body's `message` field (or `OK`).
//!
//! # Usage
//!
//! ```no_run
//! use collection_hooks::config::CollectionConfig;
//! use collection_hooks::console::LogConsole;
//! use collection_hooks::executor::HookedExecutor;
//! use collection_hooks::models::{HttpMethod, HttpRequest};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let executor = HookedExecutor::collection(&CollectionConfig::default(), Arc::new(LogConsole));
//! let request = HttpRequest::with_generated_id(
//!     HttpMethod::GET,
//!     "http://localhost:8081/api/auth/health",
//! );
//! let response = executor.send(request).await?;
//! println!("{}", response.status_code);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod console;
pub mod executor;
pub mod formatter;
pub mod hooks;
pub mod models;

pub use config::CollectionConfig;
pub use console::{Console, ConsoleLevel, LogConsole, RecordingConsole};
pub use executor::{execute_request, ExecutionConfig, HookedExecutor, RequestError};
pub use hooks::{
    CollectionPostResponse, CollectionPreRequest, HookChain, PostResponseHook, PreRequestHook,
};
pub use models::{HttpMethod, HttpRequest, HttpResponse};
