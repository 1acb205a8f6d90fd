//! OpenAPI documentation configuration.

use axum::Json;
use utoipa::OpenApi;

use super::error::ErrorResponse;
use super::routes::{self, HealthResponse, WelcomeResponse};
use crate::models::{AnalysisResult, Document, Entity, SentimentResult};

/// OpenAPI documentation for the analysis API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Document Analyst API",
        description = "Text summarization, named entity recognition and sentiment analysis",
    ),
    paths(routes::root, routes::health, routes::analyze),
    components(schemas(
        Document,
        Entity,
        SentimentResult,
        AnalysisResult,
        WelcomeResponse,
        HealthResponse,
        ErrorResponse,
    )),
    tags(
        (name = "analysis", description = "Document analysis"),
        (name = "meta", description = "Service information"),
    )
)]
pub struct ApiDoc;

/// GET /openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
