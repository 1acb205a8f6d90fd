//! Error types for the server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::analysis::AnalysisError;

/// Server error type.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The document failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The document exceeds the configured size limit.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// An inference collaborator failed.
    #[error("Inference failed: {0}")]
    Inference(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AnalysisError> for ServerError {
    fn from(e: AnalysisError) -> Self {
        match e {
            AnalysisError::InvalidInput(msg) => ServerError::InvalidInput(msg),
            e @ AnalysisError::TooLarge { .. } => ServerError::PayloadTooLarge(e.to_string()),
            e @ AnalysisError::Inference { .. } => ServerError::Inference(e.to_string()),
        }
    }
}

/// Result type for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;

/// Error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ServerError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ServerError::InvalidInput(_) => (StatusCode::UNPROCESSABLE_ENTITY, "invalid_input"),
            ServerError::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large"),
            ServerError::Inference(_) => (StatusCode::BAD_GATEWAY, "inference_failed"),
            ServerError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = %status, code, error = %message, "Server error");
        } else {
            tracing::warn!(status = %status, code, error = %message, "Client error");
        }

        let body = ErrorResponse {
            code: code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Stage;
    use crate::nlp::InferenceError;

    #[test]
    fn test_analysis_errors_map_to_distinct_statuses() {
        let cases = [
            (
                AnalysisError::InvalidInput("text must not be empty".to_string()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                AnalysisError::TooLarge { chars: 5, limit: 4 },
                StatusCode::PAYLOAD_TOO_LARGE,
            ),
            (
                AnalysisError::Inference {
                    stage: Stage::Entities,
                    source: InferenceError::Failed("boom".to_string()),
                },
                StatusCode::BAD_GATEWAY,
            ),
        ];

        for (err, expected) in cases {
            let response = ServerError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[tokio::test]
    async fn test_error_body_has_code_and_message() {
        let response = ServerError::Inference("summarization failed: boom".to_string()).into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "inference_failed");
        assert!(error.message.contains("summarization failed"));
    }
}
