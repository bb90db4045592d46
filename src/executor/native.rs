//! HTTP request execution with reqwest.

use crate::executor::config::ExecutionConfig;
use crate::executor::error::RequestError;
use crate::models::request::{HttpMethod, HttpRequest};
use crate::models::response::HttpResponse;
use hyper::ext::ReasonPhrase;
use reqwest::StatusCode;
use std::time::Instant;

/// Executes a request as-is and captures the full response.
///
/// Headers are sent exactly as they appear on `request`; hooks and default
/// headers are applied by the caller. Non-2xx statuses are returned as
/// responses, not errors. The status text is the server's reason phrase
/// when it differs from the canonical one.
pub async fn execute_request(
    request: &HttpRequest,
    config: &ExecutionConfig,
) -> Result<HttpResponse, RequestError> {
    let url = validate_url(&request.url)?;

    let method = match request.method {
        HttpMethod::GET => reqwest::Method::GET,
        HttpMethod::POST => reqwest::Method::POST,
        HttpMethod::PUT => reqwest::Method::PUT,
        HttpMethod::DELETE => reqwest::Method::DELETE,
        HttpMethod::PATCH => reqwest::Method::PATCH,
        HttpMethod::HEAD => reqwest::Method::HEAD,
        HttpMethod::OPTIONS => reqwest::Method::OPTIONS,
        HttpMethod::TRACE => reqwest::Method::TRACE,
        HttpMethod::CONNECT => reqwest::Method::CONNECT,
    };

    let redirect_policy = if config.follow_redirects {
        reqwest::redirect::Policy::limited(config.max_redirects as usize)
    } else {
        reqwest::redirect::Policy::none()
    };

    let client = reqwest::Client::builder()
        .timeout(config.timeout_duration())
        .redirect(redirect_policy)
        .build()
        .map_err(|e| RequestError::BuildError(e.to_string()))?;

    let mut req_builder = client.request(method, url);
    for (name, value) in &request.headers {
        req_builder = req_builder.header(name, value);
    }
    if let Some(body) = &request.body {
        req_builder = req_builder.body(body.clone());
    }

    log::debug!("[{}] dispatching {} {}", request.id, request.method, request.url);
    let start_time = Instant::now();

    let response = req_builder.send().await?;

    let status = response.status();
    let status_text = status_text(
        status,
        response
            .extensions()
            .get::<ReasonPhrase>()
            .map(|reason| reason.as_bytes()),
    );

    let mut response_headers = Vec::new();
    for (name, value) in response.headers() {
        if let Ok(value_str) = value.to_str() {
            response_headers.push((name.as_str().to_string(), value_str.to_string()));
        }
    }

    let body = response.bytes().await?.to_vec();
    let duration = start_time.elapsed();

    log::debug!(
        "[{}] received {} in {}ms",
        request.id,
        status.as_u16(),
        duration.as_millis()
    );

    let mut http_response = HttpResponse::new(status.as_u16(), status_text);
    for (name, value) in response_headers {
        http_response.add_header(name, value);
    }
    http_response.set_body(body);
    http_response.duration = duration;

    Ok(http_response)
}

/// Picks the status text reported to hooks.
///
/// The reason phrase the server sent wins when it is valid UTF-8; otherwise
/// the canonical phrase for the code, or an empty string for unregistered
/// codes.
pub(crate) fn status_text(status: StatusCode, reason: Option<&[u8]>) -> String {
    if let Some(text) = reason.and_then(|r| std::str::from_utf8(r).ok()) {
        return text.to_string();
    }

    status.canonical_reason().unwrap_or_default().to_string()
}

/// Parses the URL and checks that it uses HTTP or HTTPS.
pub(crate) fn validate_url(url: &str) -> Result<url::Url, RequestError> {
    let parsed = url::Url::parse(url)?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(RequestError::UnsupportedProtocol(format!(
            "Only HTTP and HTTPS are supported, got: {}",
            scheme
        )));
    }

    Ok(parsed)
}
