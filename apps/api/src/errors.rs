use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::extractor::ExtractionError;
use crate::llm_client::{ImageInputError, LlmError};

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// The model answered but its output could not be turned into a resume.
    /// `raw` is the untouched model output.
    #[error("Extraction failed at stage {stage}")]
    ExtractionFailed { stage: String, raw: String },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ImageInputError> for AppError {
    fn from(e: ImageInputError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl From<ExtractionError> for AppError {
    fn from(e: ExtractionError) -> Self {
        match e {
            ExtractionError::Model { source, .. } => AppError::Llm(source),
            ExtractionError::Failed { stage, raw_output } => AppError::ExtractionFailed {
                stage: stage.to_string(),
                raw: raw_output,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "VALIDATION_ERROR", "message": message }),
            ),
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "LLM_ERROR",
                        "message": "An AI processing error occurred"
                    }),
                )
            }
            AppError::ExtractionFailed { stage, raw } => {
                let preview: String = raw.chars().take(200).collect();
                tracing::error!("Extraction failed at stage {stage}: {preview:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "EXTRACTION_FAILED", "stage": stage, "raw": raw }),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "INTERNAL_ERROR",
                        "message": "An internal server error occurred"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
