//! Output sink for hook diagnostics.
//!
//! Hooks never print directly. They write to a [`Console`], which the host
//! picks: [`LogConsole`] routes lines through the `log` facade, while
//! [`RecordingConsole`] keeps them in memory so callers can inspect what a
//! hook reported.

use std::sync::{Arc, Mutex};

/// Log target used for every hook line.
pub const LOG_TARGET: &str = "collection";

/// Severity of a console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Log,
    Error,
}

/// Destination for hook output lines.
pub trait Console: Send + Sync {
    /// Writes an informational line.
    fn log(&self, line: &str);

    /// Writes an error line.
    fn error(&self, line: &str);
}

/// Console backed by the `log` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogConsole;

impl Console for LogConsole {
    fn log(&self, line: &str) {
        log::info!(target: LOG_TARGET, "{}", line);
    }

    fn error(&self, line: &str) {
        log::error!(target: LOG_TARGET, "{}", line);
    }
}

/// Console that records every line in memory.
///
/// Cloning shares the underlying buffer.
#[derive(Debug, Default, Clone)]
pub struct RecordingConsole {
    entries: Arc<Mutex<Vec<(ConsoleLevel, String)>>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded lines in write order.
    pub fn entries(&self) -> Vec<(ConsoleLevel, String)> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Returns the recorded lines of one level.
    pub fn lines(&self, level: ConsoleLevel) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, line)| line)
            .collect()
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    fn push(&self, level: ConsoleLevel, line: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((level, line.to_string()));
        }
    }
}

impl Console for RecordingConsole {
    fn log(&self, line: &str) {
        self.push(ConsoleLevel::Log, line);
    }

    fn error(&self, line: &str) {
        self.push(ConsoleLevel::Error, line);
    }
}
