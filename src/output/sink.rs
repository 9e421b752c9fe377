// src/output/sink.rs
//! Output sink implementations.
//!
//! [`ConsoleSink`] is the only place where stdout I/O occurs. [`MemorySink`]
//! records everything written so tests can assert on the exact byte stream.

use std::io::{self, Write};
use std::sync::Mutex;

/// Destination for human-readable output fragments.
///
/// A fragment is written verbatim; no newline is appended. An attribution
/// prefix and the transmission line that follows it form a single output
/// line built from two fragments.
pub trait OutputSink: Send + Sync {
    fn write(&self, fragment: &str) -> io::Result<()>;
}

/// Sink backed by process stdout.
///
/// Each fragment is written and flushed under the stdout lock so fragments
/// from one logical line are never torn apart.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for ConsoleSink {
    fn write(&self, fragment: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(fragment.as_bytes())?;
        stdout.flush()
    }
}

/// Sink that accumulates fragments in memory.
///
/// Used by tests to observe exactly what would have reached the console.
#[derive(Debug, Default)]
pub struct MemorySink {
    buffer: Mutex<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, in write order.
    pub fn contents(&self) -> String {
        self.buffer
            .lock()
            .map(|buffer| buffer.clone())
            .unwrap_or_default()
    }
}

impl OutputSink for MemorySink {
    fn write(&self, fragment: &str) -> io::Result<()> {
        let mut buffer = self
            .buffer
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "memory sink lock poisoned"))?;
        buffer.push_str(fragment);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_accumulates_fragments_in_order() {
        let sink = MemorySink::new();
        sink.write("first ").unwrap();
        sink.write("second\n").unwrap();
        assert_eq!(sink.contents(), "first second\n");
    }

    #[test]
    fn memory_sink_appends_verbatim() {
        let sink = MemorySink::new();
        sink.write("no newline added").unwrap();
        assert_eq!(sink.contents(), "no newline added");
    }
}
