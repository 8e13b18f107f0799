//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber from configuration
//! - Honour `RUST_LOG` over the configured level
//! - Keep request-details events visible whatever the level
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - JSON format for production, text format for development
//! - The details target is pinned to INFO; it is the endpoint's output, not chatter

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};
use crate::inspect::sink::DETAILS_TARGET;

/// Build the default filter directive for a configured level.
pub fn default_directive(level: &str) -> String {
    let level = level.to_ascii_lowercase();
    format!("request_inspector={level},tower_http={level}")
}

/// Full directive string: `RUST_LOG` (when set and non-blank) or the
/// configured level, followed by the details target at INFO.
pub fn filter_directives(rust_log: Option<&str>, level: &str) -> String {
    let base = match rust_log.map(str::trim) {
        Some(directives) if !directives.is_empty() => directives.to_string(),
        _ => default_directive(level),
    };
    format!("{base},{DETAILS_TARGET}=info")
}

/// Build the env filter for a logging configuration.
///
/// Invalid directives in `RUST_LOG` are skipped rather than rejected.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    EnvFilter::builder().parse_lossy(filter_directives(rust_log.as_deref(), &config.level))
}

/// Install the global tracing subscriber.
///
/// Fails if a global subscriber has already been set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), tracing_subscriber::util::TryInitError> {
    let registry = tracing_subscriber::registry().with(env_filter(config));

    match config.format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_covers_crate_and_tower_http() {
        assert_eq!(
            default_directive("WARN"),
            "request_inspector=warn,tower_http=warn"
        );
    }

    #[test]
    fn test_configured_level_keeps_details_target() {
        assert_eq!(
            filter_directives(None, "error"),
            "request_inspector=error,tower_http=error,request_inspector::details=info"
        );
    }

    #[test]
    fn test_rust_log_overrides_level_but_keeps_details_target() {
        assert_eq!(
            filter_directives(Some("warn"), "debug"),
            "warn,request_inspector::details=info"
        );
        assert_eq!(
            filter_directives(Some("  "), "debug"),
            "request_inspector=debug,tower_http=debug,request_inspector::details=info"
        );
    }
}
