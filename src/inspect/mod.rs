//! Request introspection subsystem.
//!
//! # Data Flow
//! ```text
//! axum handler (http/server.rs)
//!     → details.rs (Method, Path, optional Authorization)
//!     → inspector.rs (serialize to one JSON line)
//!     → sink.rs (tracing event, stdout, or in-memory capture)
//!
//! On serialization failure:
//!     inspector.rs → error.rs (InspectError)
//!     → one diagnostic line to the same sink, no JSON line
//! ```
//!
//! # Design Decisions
//! - Stateless: a RequestDetails lives for exactly one request
//! - Failures are recovered where they occur and never reach the client
//! - Sinks write whole lines so concurrent requests never interleave

pub mod details;
pub mod error;
pub mod inspector;
pub mod sink;

pub use details::RequestDetails;
pub use error::{InspectError, SERIALIZATION_FAILURE_PREFIX};
pub use inspector::{to_json_line, Inspector};
pub use sink::{CaptureSink, LineKind, LogSink, StdoutSink, TracingSink};
