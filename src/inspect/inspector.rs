//! The request inspector: capture, serialize, emit.

use axum::http::request::Parts;
use serde::Serialize;

use crate::inspect::details::RequestDetails;
use crate::inspect::error::InspectError;
use crate::inspect::sink::{LineKind, LogSink};

/// Serialize a value into a compact, single-line JSON object.
pub fn to_json_line<T: Serialize + ?Sized>(value: &T) -> Result<String, InspectError> {
    Ok(serde_json::to_string(value)?)
}

/// Turns inbound requests into log lines.
///
/// Holds no per-request state; one instance is shared by every request task.
#[derive(Debug, Default)]
pub struct Inspector<S> {
    sink: S,
}

impl<S: LogSink> Inspector<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Capture the details of a request and write them to the sink.
    pub fn inspect(&self, parts: &Parts) {
        let details = RequestDetails::from_parts(parts);
        tracing::trace!(entries = details.len(), "Captured request details");
        self.emit(&details);
    }

    /// Write one JSON line for `value`, or one diagnostic line if it cannot
    /// be serialized. Failures are not propagated.
    pub fn emit<T: Serialize + ?Sized>(&self, value: &T) {
        match to_json_line(value) {
            Ok(line) => self.sink.write_line(LineKind::Details, &line),
            Err(e) => self.sink.write_line(LineKind::Diagnostic, &e.to_string()),
        }
    }
}
