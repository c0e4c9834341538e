//! The `sink` module defines the observability capability handed to each
//! entry point.
//!
//! Both the publisher and the consumer record their lifecycle events
//! (startup, success, skip, error) through an injected `EventSink` instead
//! of a process-global logger, so tests can capture output deterministically.

pub mod logging;

#[cfg(test)]
mod tests;

use std::sync::Mutex;

/// Records lifecycle events emitted by the relay entry points.
pub trait EventSink {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards events to the active `tracing` subscriber.
#[derive(Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Captures events in memory, in emission order.
///
/// Used by tests to assert on the exact lines an invocation produced.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of everything recorded so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }
}

impl EventSink for MemorySink {
    fn info(&self, message: &str) {
        self.lines.lock().unwrap().push(format!("INFO {message}"));
    }

    fn error(&self, message: &str) {
        self.lines.lock().unwrap().push(format!("ERROR {message}"));
    }
}
