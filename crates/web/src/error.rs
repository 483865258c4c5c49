use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use easi_core::chat::GENERATION_FAILED_MESSAGE;
use easi_core::error::CoreError;
use easi_llm::CompletionError;
use serde_json::json;

/// Application-level error type for JSON handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent `{ "error", "code" }`
/// bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `easi_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The completion provider failed.
    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }

            AppError::Completion(err) => {
                tracing::error!(error = %err, "Chat completion failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "COMPLETION_FAILED",
                    GENERATION_FAILED_MESSAGE.to_string(),
                )
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
