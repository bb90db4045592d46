//! Integration tests module for collection hooks
//!
//! Shared helpers for driving the hooked executor against a mock server.

pub mod hooked_executor_test;
pub mod hook_properties_test;

use collection_hooks::config::CollectionConfig;
use collection_hooks::console::RecordingConsole;
use collection_hooks::executor::HookedExecutor;
use std::sync::{Arc, Once};

static INIT: Once = Once::new();

/// Initialize test environment (run once)
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Builds a collection executor that records hook output.
pub fn recording_executor(config: &CollectionConfig) -> (HookedExecutor, RecordingConsole) {
    init_test_env();
    let console = RecordingConsole::new();
    let executor = HookedExecutor::collection(config, Arc::new(console.clone()));
    (executor, console)
}
