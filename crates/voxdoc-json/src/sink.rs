//! Document output sink
//!
//! One serialized document per utterance leaves through a `ResultSink`. The
//! standard sink writes a single `JSON> <doc>` line to stdout and flushes
//! after every line so consumers reading the stream never wait on buffering.

use std::io::Write;

/// Line prefix marking a serialized document on the output stream.
pub const JSON_PREFIX: &str = "JSON> ";

/// Receiver of serialized utterance documents.
pub trait ResultSink {
    /// Deliver one complete serialized document.
    fn emit(&mut self, document: &str) -> std::io::Result<()>;
}

/// Unbuffered line-per-document stdout sink.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl ResultSink for StdoutSink {
    fn emit(&mut self, document: &str) -> std::io::Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}{}", JSON_PREFIX, document)?;
        handle.flush()
    }
}

/// Test sink collecting emitted documents in memory.
#[derive(Debug, Default)]
pub struct CaptureSink {
    documents: Vec<String>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn documents(&self) -> &[String] {
        &self.documents
    }
}

impl ResultSink for CaptureSink {
    fn emit(&mut self, document: &str) -> std::io::Result<()> {
        self.documents.push(document.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_sink_collects_in_order() {
        let mut sink = CaptureSink::new();
        sink.emit("{\"a\":1}").unwrap();
        sink.emit("{\"b\":2}").unwrap();
        assert_eq!(sink.documents(), ["{\"a\":1}", "{\"b\":2}"]);
    }
}
