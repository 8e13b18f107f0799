//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (startup, request spans, request details)
//!
//! logging.rs installs the subscriber:
//!     → EnvFilter (RUST_LOG, else configured level)
//!     → fmt layer (text or JSON) → stdout
//! ```
//!
//! # Design Decisions
//! - One global subscriber installed by the binary, never by the library
//! - Request details share the stream with everything else under their own target

pub mod logging;
