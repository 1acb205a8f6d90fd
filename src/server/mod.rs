//! HTTP server for document analysis.
//!
//! # Example
//!
//! ```ignore
//! use docanalyst::server::{Server, ServerConfig};
//!
//! let config = ServerConfig::new().with_bind_address("127.0.0.1:8000".parse()?);
//!
//! Server::with_default_analyzers(config).run().await?;
//! ```

pub mod config;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::{ErrorResponse, Result, ServerError};
pub use state::AppState;

use std::net::SocketAddr;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::analysis::DocumentAnalyzer;

/// Build the router with all routes and middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health))
        .route("/analyze", post(routes::analyze))
        .route("/openapi.json", get(openapi::openapi_json))
        .layer(DefaultBodyLimit::max(state.config.max_body_size))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The document analysis HTTP server.
pub struct Server {
    state: AppState,
}

impl Server {
    pub fn new(analyzer: DocumentAnalyzer, config: ServerConfig) -> Self {
        Self {
            state: AppState::new(analyzer, config),
        }
    }

    /// Server over the built-in collaborators, limited by `config.limits`.
    pub fn with_default_analyzers(config: ServerConfig) -> Self {
        Self::new(DocumentAnalyzer::with_defaults(config.limits), config)
    }

    pub fn router(&self) -> Router {
        router(self.state.clone())
    }

    /// Get the configured bind address.
    pub fn bind_address(&self) -> SocketAddr {
        self.state.config.bind_address
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn run(self) -> Result<()> {
        let addr = self.bind_address();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

        self.run_with_listener(listener).await
    }

    /// Serve on an already bound listener (useful for testing on port 0).
    pub async fn run_with_listener(self, listener: TcpListener) -> Result<()> {
        let router = self.router();

        if let Ok(addr) = listener.local_addr() {
            info!("Starting server on {}", addr);
        }

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AnalyzerLimits;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use tower::ServiceExt;

    fn post_analyze(body: String) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/analyze")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[test]
    fn test_default_analyzers_use_config_limits() {
        let limits = AnalyzerLimits {
            max_input_chars: 42,
            ..AnalyzerLimits::default()
        };
        let server = Server::with_default_analyzers(ServerConfig::new().with_limits(limits));
        assert_eq!(server.state.analyzer.limits(), &server.state.config.limits);
        assert_eq!(server.state.analyzer.limits().max_input_chars, 42);
    }

    #[tokio::test]
    async fn test_config_limits_reach_the_analyzer() {
        let limits = AnalyzerLimits {
            max_input_chars: 16,
            ..AnalyzerLimits::default()
        };
        let server = Server::with_default_analyzers(ServerConfig::new().with_limits(limits));

        let body = serde_json::json!({ "text": "x".repeat(17) }).to_string();
        let response = server.router().oneshot(post_analyze(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_body_limit_rejects_large_requests() {
        let server = Server::with_default_analyzers(ServerConfig::new().with_max_body_size(64));

        let body = serde_json::json!({ "text": "word ".repeat(100) }).to_string();
        let response = server.router().oneshot(post_analyze(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
