//! Property tests for the pre-request hook.

use chrono::{DateTime, Utc};
use collection_hooks::console::RecordingConsole;
use collection_hooks::hooks::{
    CollectionPreRequest, PreRequestHook, DEFAULT_USER_AGENT, TIMESTAMP_HEADER, USER_AGENT_HEADER,
};
use collection_hooks::models::{HttpMethod, HttpRequest};
use proptest::prelude::*;
use std::sync::Arc;

fn method_strategy() -> impl Strategy<Value = HttpMethod> {
    prop_oneof![
        Just(HttpMethod::GET),
        Just(HttpMethod::POST),
        Just(HttpMethod::PUT),
        Just(HttpMethod::DELETE),
        Just(HttpMethod::PATCH),
        Just(HttpMethod::OPTIONS),
        Just(HttpMethod::HEAD),
    ]
}

fn header_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("user-agent".to_string()),
        Just("X-REQUEST-TIMESTAMP".to_string()),
        "[A-Za-z][A-Za-z0-9-]{0,15}",
    ]
}

proptest! {
    #[test]
    fn headers_always_present_after_pre_request(
        method in method_strategy(),
        path in "[a-z0-9/]{0,24}",
        headers in proptest::collection::vec((header_name_strategy(), "[ -~]{0,20}"), 0..6),
    ) {
        let console = RecordingConsole::new();
        let hook = CollectionPreRequest::new(Arc::new(console.clone()));

        let url = format!("http://localhost:8081/{}", path);
        let mut request = HttpRequest::new("prop".to_string(), method, url.clone());
        for (name, value) in headers {
            request.set_header(name, value);
        }

        let before = Utc::now();
        hook.before_request(&mut request);
        let after = Utc::now();

        prop_assert_eq!(request.get_header(USER_AGENT_HEADER), Some(DEFAULT_USER_AGENT));

        let stamp = request.get_header(TIMESTAMP_HEADER).unwrap();
        let stamped = DateTime::parse_from_rfc3339(stamp).unwrap().with_timezone(&Utc);
        prop_assert!(stamped >= before - chrono::Duration::milliseconds(1));
        prop_assert!(stamped <= after);

        let user_agents = request
            .headers
            .keys()
            .filter(|k| k.eq_ignore_ascii_case(USER_AGENT_HEADER))
            .count();
        prop_assert_eq!(user_agents, 1);

        prop_assert_eq!(console.entries().len(), 1);
        prop_assert_eq!(
            console.entries()[0].1.clone(),
            format!("🚀 Executing: {} {}", method, url)
        );
    }
}
