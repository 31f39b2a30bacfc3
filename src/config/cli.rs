use crate::domain::ports::EventSink;
use std::sync::{Arc, Mutex};

/// Prints demo output lines to stdout, prefixed with the demo name.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn emit(&self, demo: &str, line: &str) {
        println!("[{}] {}", demo, line);
    }
}

/// Captures demo output lines in memory; used by the test suites to
/// assert on what a demo emitted.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("sink lock poisoned").clone()
    }
}

impl EventSink for MemorySink {
    fn emit(&self, demo: &str, line: &str) {
        self.lines
            .lock()
            .expect("sink lock poisoned")
            .push(format!("[{}] {}", demo, line));
    }
}
