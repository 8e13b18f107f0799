//! Errors raised while turning request details into a log line.

use thiserror::Error;

/// Prefix of the diagnostic line written when serialization fails.
pub const SERIALIZATION_FAILURE_PREFIX: &str = "failed to serialize request details";

/// Errors that can occur while inspecting a request.
#[derive(Debug, Error)]
pub enum InspectError {
    /// The details could not be converted to JSON text.
    #[error("failed to serialize request details: {0}")]
    Serialization(#[from] serde_json::Error),
}
