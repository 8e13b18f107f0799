//! HTTP server setup.
//!
//! # Responsibilities
//! - Build an explicit Axum Router; no process-wide handler registry
//! - Send every method and path to the same inspection handler
//! - Serve on a listener supplied by the caller

use axum::{
    extract::{Request, State},
    routing::any,
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::inspect::{Inspector, LogSink};

/// HTTP server exposing the request inspector.
pub struct InspectServer {
    router: Router,
}

impl InspectServer {
    /// Create a server that reports every request to `inspector`.
    pub fn new<S: LogSink + 'static>(inspector: Arc<Inspector<S>>) -> Self {
        Self {
            router: Self::build_router(inspector),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router<S: LogSink + 'static>(inspector: Arc<Inspector<S>>) -> Router {
        Router::new()
            .route("/", any(inspect_request::<S>))
            .route("/{*path}", any(inspect_request::<S>))
            .fallback(inspect_request::<S>)
            .with_state(inspector)
            .layer(TraceLayer::new_for_http())
    }

    /// The router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Each connection is served on its own task. Returns only on an I/O error.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router).await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Records the request and answers with the runtime's default empty 200.
async fn inspect_request<S: LogSink + 'static>(
    State(inspector): State<Arc<Inspector<S>>>,
    request: Request,
) {
    let (parts, _body) = request.into_parts();
    inspector.inspect(&parts);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::CaptureSink;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn server() -> (InspectServer, Arc<Inspector<CaptureSink>>) {
        let inspector = Arc::new(Inspector::new(CaptureSink::new()));
        (InspectServer::new(inspector.clone()), inspector)
    }

    #[tokio::test]
    async fn test_any_method_and_path_is_inspected() {
        let (server, inspector) = server();

        for (method, uri) in [("GET", "/"), ("PATCH", "/deep/nested/path"), ("OPTIONS", "/x?y=z")] {
            let response = server
                .router()
                .oneshot(
                    Request::builder()
                        .method(method)
                        .uri(uri)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        assert_eq!(
            inspector.sink().details(),
            vec![
                r#"{"Method":"GET","Path":"/"}"#,
                r#"{"Method":"PATCH","Path":"/deep/nested/path"}"#,
                r#"{"Method":"OPTIONS","Path":"/x"}"#,
            ]
        );
    }

    #[tokio::test]
    async fn test_response_body_is_empty() {
        let (server, _inspector) = server();

        let response = server
            .router()
            .oneshot(
                Request::builder()
                    .uri("/status")
                    .header("authorization", "Bearer t")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert!(body.is_empty());
    }
}
