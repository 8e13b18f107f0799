//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use request_inspector::inspect::CaptureSink;
use request_inspector::{InspectServer, Inspector};
use serde_json::{Map, Value};
use tokio::net::TcpListener;

/// Start the inspector on an ephemeral local port with an in-memory sink.
pub async fn start_inspector() -> (SocketAddr, Arc<Inspector<CaptureSink>>) {
    let inspector = Arc::new(Inspector::new(CaptureSink::new()));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = InspectServer::new(inspector.clone());
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    (addr, inspector)
}

/// Client without connection pooling or proxy settings from the environment.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

/// Parse a details line into its JSON object.
pub fn parse_line(line: &str) -> Map<String, Value> {
    match serde_json::from_str::<Value>(line).expect("details line is valid JSON") {
        Value::Object(map) => map,
        other => panic!("expected JSON object, got {other}"),
    }
}
