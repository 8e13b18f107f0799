//! Logging sinks that accept fully formatted lines.
//!
//! # Responsibilities
//! - Accept one complete line per call from any number of request tasks
//! - Keep request-details lines and diagnostic lines distinguishable
//!
//! # Design Decisions
//! - Every write is a single line; no sink ever splits a line across calls
//! - Sinks never fail from the caller's point of view

use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Tracing target used for request-details and diagnostic events.
pub const DETAILS_TARGET: &str = "request_inspector::details";

/// What a line written to a sink represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A serialized RequestDetails object.
    Details,
    /// A diagnostic describing why no details line was written.
    Diagnostic,
}

/// Destination for inspector output.
///
/// Implementations must be safe to call concurrently and must write each
/// line atomically with respect to other calls.
pub trait LogSink: Send + Sync {
    fn write_line(&self, kind: LineKind, line: &str);
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn write_line(&self, kind: LineKind, line: &str) {
        (**self).write_line(kind, line)
    }
}

/// Emits each line as one tracing event.
///
/// Details lines are logged at INFO, diagnostics at ERROR.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write_line(&self, kind: LineKind, line: &str) {
        match kind {
            LineKind::Details => tracing::info!(target: DETAILS_TARGET, "{line}"),
            LineKind::Diagnostic => tracing::error!(target: DETAILS_TARGET, "{line}"),
        }
    }
}

/// Writes details lines to stdout and diagnostics to stderr, bypassing tracing.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn write_line(&self, kind: LineKind, line: &str) {
        let result = match kind {
            LineKind::Details => write_whole_line(std::io::stdout().lock(), line),
            LineKind::Diagnostic => write_whole_line(std::io::stderr().lock(), line),
        };
        if let Err(e) = result {
            tracing::warn!(error = %e, kind = ?kind, "Failed to write inspector line");
        }
    }
}

/// Write `line` plus a newline in one call and flush.
fn write_whole_line<W: Write>(mut writer: W, line: &str) -> std::io::Result<()> {
    let mut buf = String::with_capacity(line.len() + 1);
    buf.push_str(line);
    buf.push('\n');
    writer.write_all(buf.as_bytes())?;
    writer.flush()
}

/// Keeps every line in memory. Used by tests and embedders that want the
/// output instead of a log stream.
#[derive(Debug, Default)]
pub struct CaptureSink {
    lines: Mutex<Vec<(LineKind, String)>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured lines in write order.
    pub fn lines(&self) -> Vec<String> {
        self.guard().iter().map(|(_, line)| line.clone()).collect()
    }

    /// Captured request-details lines only.
    pub fn details(&self) -> Vec<String> {
        self.of_kind(LineKind::Details)
    }

    /// Captured diagnostic lines only.
    pub fn diagnostics(&self) -> Vec<String> {
        self.of_kind(LineKind::Diagnostic)
    }

    /// Drop everything captured so far.
    pub fn clear(&self) {
        self.guard().clear();
    }

    fn of_kind(&self, kind: LineKind) -> Vec<String> {
        self.guard()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, line)| line.clone())
            .collect()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<(LineKind, String)>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LogSink for CaptureSink {
    fn write_line(&self, kind: LineKind, line: &str) {
        self.guard().push((kind, line.to_owned()));
    }
}
