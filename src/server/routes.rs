//! HTTP handlers.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use utoipa::ToSchema;

use crate::models::{AnalysisResult, Document};
use crate::server::error::{ErrorResponse, ServerError};
use crate::server::state::AppState;

pub const WELCOME_MESSAGE: &str =
    "Welcome to the Document Analyst API. Go to /openapi.json for more information.";

/// Root response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Static welcome message.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = WelcomeResponse),
    ),
    tag = "meta"
)]
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    ),
    tag = "meta"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Run entity recognition, summarization and sentiment analysis on a document.
///
/// The three stages run one after another on the blocking pool.
#[utoipa::path(
    post,
    path = "/analyze",
    request_body = Document,
    responses(
        (status = 200, description = "Analysis of the document", body = AnalysisResult),
        (status = 413, description = "Document exceeds the size limit", body = ErrorResponse),
        (status = 422, description = "Document is empty or has no words", body = ErrorResponse),
        (status = 502, description = "An analysis stage failed", body = ErrorResponse),
    ),
    tag = "analysis"
)]
pub async fn analyze(
    State(state): State<AppState>,
    Json(doc): Json<Document>,
) -> Result<Json<AnalysisResult>, ServerError> {
    debug!(chars = doc.text.chars().count(), "Analysis requested");

    let analyzer = Arc::clone(&state.analyzer);
    let result = tokio::task::spawn_blocking(move || analyzer.analyze(&doc))
        .await
        .map_err(|e| ServerError::Internal(format!("Analysis task failed: {}", e)))??;

    info!(
        entities = result.entities.len(),
        sentiment = %result.sentiment.label,
        "Document analyzed"
    );

    Ok(Json(result))
}
