//! ui::output
//!
//! Error sink and plain output helpers.
//!
//! # Design
//!
//! Errors are surfaced through an [`ErrorSink`] so the same launcher code
//! works whether or not an interactive UI is reachable. Before the engine
//! is up there is never a UI, so the default sink is a plain text line on
//! stderr; an engine backend that can draw dialog boxes supplies its own
//! sink.

use std::fmt::Display;
use std::sync::Mutex;

/// Destination for error messages.
pub trait ErrorSink {
    /// Report an error with a short title and a message.
    fn error(&self, title: &str, message: &str);
}

/// Plain-text sink writing one line per error to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextSink;

impl ErrorSink for TextSink {
    fn error(&self, title: &str, message: &str) {
        eprintln!("{title}: {message}");
    }
}

/// Sink that records messages for test verification.
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded messages, formatted as `title: message`.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl ErrorSink for RecordingSink {
    fn error(&self, title: &str, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("{title}: {message}"));
    }
}

/// Print a plain line to stdout.
pub fn line(message: impl Display) {
    println!("{message}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_captures_in_order() {
        let sink = RecordingSink::new();
        sink.error("Error", "first");
        sink.error("Warning", "second");
        assert_eq!(sink.messages(), vec!["Error: first", "Warning: second"]);
    }
}
