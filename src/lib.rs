//! Request inspector library.
//!
//! A single HTTP endpoint that logs the method, path and Authorization
//! header of every request it receives as one compact JSON line.

pub mod config;
pub mod http;
pub mod inspect;
pub mod observability;

pub use config::InspectorConfig;
pub use http::InspectServer;
pub use inspect::{Inspector, LogSink, RequestDetails};
