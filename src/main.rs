//! Request Inspector (v1)
//!
//! Logs inbound request metadata for diagnostics.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request      ┌──────────────────────────────────────────────┐
//!     ────────────────────┼─▶ http::server ──▶ inspect::Inspector        │
//!                         │   (any method,      │                         │
//!     Empty 200 OK        │    any path)        ▼                         │
//!     ◀───────────────────┼──────────────  RequestDetails ──▶ LogSink ───┼──▶ log line
//!                         │                                              │
//!                         │  config (TOML) ──▶ observability::logging    │
//!                         └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use request_inspector::config::{load_config, InspectorConfig, SinkKind, LISTEN_ADDRESS};
use request_inspector::inspect::{LogSink, StdoutSink, TracingSink};
use request_inspector::observability::logging::init_logging;
use request_inspector::{InspectServer, Inspector};

#[derive(Parser)]
#[command(name = "request-inspector")]
#[command(about = "Logs the method, path and Authorization header of every HTTP request", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => InspectorConfig::default(),
    };

    init_logging(&config.logging)?;

    tracing::info!("request-inspector v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_path = ?cli.config,
        level = %config.logging.level,
        format = ?config.logging.format,
        sink = ?config.logging.sink,
        "Configuration loaded"
    );

    let sink: Box<dyn LogSink> = match config.logging.sink {
        SinkKind::Tracing => Box::new(TracingSink),
        SinkKind::Stdout => Box::new(StdoutSink),
    };
    let inspector = Arc::new(Inspector::new(sink));

    let listener = TcpListener::bind(LISTEN_ADDRESS).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    InspectServer::new(inspector).run(listener).await?;

    Ok(())
}
