//! Data models for HTTP requests and responses.
//!
//! These are the host-owned objects that hooks read and annotate.

pub mod request;
pub mod response;

pub use request::{HttpMethod, HttpRequest};
pub use response::HttpResponse;
