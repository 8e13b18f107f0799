//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection (bound by the caller)
//!     → server.rs (Axum setup, TraceLayer span)
//!     → inspect_request handler (every method, every path)
//!     → Inspector (details line or diagnostic line)
//!     → empty 200 OK to client
//! ```

pub mod server;

pub use server::InspectServer;
