// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report sinks: where runner report text goes.
//!
//! Runners never print directly; every line of report text is handed to an
//! injected [`ReportSink`]. [`WriteSink`] wraps any [`Write`] target (stdout
//! under `cargo test`, a byte buffer under test), and [`MemorySink`] captures
//! lines for inspection after a run.

use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// Line-oriented text sink for report output.
pub trait ReportSink {
    /// Record one line of report text. Multi-line report blocks arrive as a
    /// single call with embedded newlines.
    fn line(&mut self, text: &str);
}

/// Sink writing each line to a [`Write`] target, newline-terminated.
///
/// Write errors are swallowed; reporting is best-effort and must never mask
/// the comparison outcome.
pub struct WriteSink<W: Write> {
    writer: W,
}

impl<W: Write> WriteSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the sink and return the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriteSink<std::io::Stdout> {
    /// Sink to stdout, which the test harness captures per test.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ReportSink for WriteSink<W> {
    fn line(&mut self, text: &str) {
        let _ = writeln!(self.writer, "{text}");
    }
}

/// Capturing sink backed by a shared line buffer.
///
/// `Clone` shares the buffer, so one handle can be moved into a runner while
/// another inspects what was reported, including after a runner panic.
#[derive(Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all lines recorded so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl ReportSink for MemorySink {
    fn line(&mut self, text: &str) {
        self.lines.lock().push(text.to_string());
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
