//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the log level is one the subscriber understands
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: InspectorConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::InspectorConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("logging.level must be one of trace, debug, info, warn, error (got {0:?})")]
    UnknownLogLevel(String),
}

/// Check a parsed configuration for semantic errors.
pub fn validate_config(config: &InspectorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(config.logging.level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
