//! HTTP request execution.
//!
//! [`execute_request`] sends a request with reqwest and captures the
//! response. [`HookedExecutor`] is the host: it runs the hook chain before
//! and after each request.

pub mod config;
pub mod error;
pub mod hooked;
pub mod native;

pub use config::ExecutionConfig;
pub use error::RequestError;
pub use hooked::HookedExecutor;
pub use native::execute_request;
