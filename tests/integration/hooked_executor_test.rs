//! End-to-end tests: hooks around real HTTP exchanges with a mock server.

use super::recording_executor;
use chrono::{DateTime, Utc};
use collection_hooks::config::CollectionConfig;
use collection_hooks::console::ConsoleLevel;
use collection_hooks::models::{HttpMethod, HttpRequest};
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

#[tokio::test]
async fn test_server_receives_injected_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .and(header("User-Agent", "Bruno-Auth-Service-Collection/1.0.0"))
        .and(header_exists("X-Request-Timestamp"))
        .respond_with(
            ResponseTemplate::new(201).set_body_string(r#"{"message":"User registered"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (executor, console) = recording_executor(&CollectionConfig::default());
    let url = format!("{}/api/auth/register", server.uri());
    let mut request = HttpRequest::with_generated_id(HttpMethod::POST, url.clone());
    request.set_header("Content-Type", "application/json");
    request.set_body(r#"{"email":"new@ifood.dev","password":"secret"}"#.to_string());

    let before = Utc::now();
    let response = executor.send(request).await.unwrap();
    let after = Utc::now();

    assert_eq!(response.status_code, 201);
    assert_eq!(
        console.lines(ConsoleLevel::Log),
        vec![
            format!("🚀 Executing: POST {}", url),
            "📨 Response: 201 - Created".to_string(),
            "✅ Success: User registered".to_string(),
        ]
    );

    let received: Vec<Request> = server.received_requests().await.unwrap();
    let stamp = received[0]
        .headers
        .get("X-Request-Timestamp")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let stamped = DateTime::parse_from_rfc3339(&stamp)
        .unwrap()
        .with_timezone(&Utc);
    assert!(stamped >= before - chrono::Duration::milliseconds(1));
    assert!(stamped <= after);
}

#[tokio::test]
async fn test_not_found_logs_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/42"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"error":"not found"}"#))
        .mount(&server)
        .await;

    let (executor, console) = recording_executor(&CollectionConfig::default());
    let request = HttpRequest::with_generated_id(
        HttpMethod::GET,
        format!("{}/api/users/42", server.uri()),
    );

    let response = executor.send(request).await.unwrap();

    assert_eq!(response.status_code, 404);
    let errors = console.lines(ConsoleLevel::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("❌ Error 404: "));
    assert!(errors[0].contains("\"error\": \"not found\""));
    assert_eq!(
        console.lines(ConsoleLevel::Log),
        vec![
            format!("🚀 Executing: GET {}/api/users/42", server.uri()),
            "📨 Response: 404 - Not Found".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_success_without_message_logs_ok() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    let (executor, console) = recording_executor(&CollectionConfig::default());
    let request = HttpRequest::with_generated_id(HttpMethod::GET, server.uri());

    executor.send(request).await.unwrap();

    let logs = console.lines(ConsoleLevel::Log);
    assert_eq!(logs.last().map(String::as_str), Some("✅ Success: OK"));
    assert!(console.lines(ConsoleLevel::Error).is_empty());
}

#[tokio::test]
async fn test_configured_headers_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("User-Agent", "Orders-Collection/2.0"))
        .and(header_exists("X-Sent-At"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"message":"ok"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = CollectionConfig::default();
    config.user_agent = "Orders-Collection/2.0".to_string();
    config.timestamp_header = "X-Sent-At".to_string();
    config
        .default_headers
        .insert("Accept".to_string(), "application/json".to_string());

    let (executor, console) = recording_executor(&config);
    let request = HttpRequest::with_generated_id(HttpMethod::GET, server.uri());

    let response = executor.send(request).await.unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(
        console.lines(ConsoleLevel::Log).last().map(String::as_str),
        Some("✅ Success: ok")
    );
}

#[tokio::test]
async fn test_transport_failure_runs_only_pre_request_hook() {
    let (executor, console) = recording_executor(&CollectionConfig::default());
    let request = HttpRequest::with_generated_id(HttpMethod::GET, "http://127.0.0.1:1/");

    assert!(executor.send(request).await.is_err());
    assert_eq!(console.entries().len(), 1);
}
