use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use brandstudio_core::error::CoreError;
use brandstudio_genai::GenAiError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`GenAiError`] for failures at
/// the generative boundary, and adds HTTP-specific variants. Implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `brandstudio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure at the generative API boundary.
    #[error(transparent)]
    GenAi(#[from] GenAiError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::InsufficientCredits(msg) => (
                    StatusCode::PAYMENT_REQUIRED,
                    "INSUFFICIENT_CREDITS",
                    msg.clone(),
                ),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Generative boundary errors ---
            AppError::GenAi(err) => classify_genai_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a generative API error into an HTTP status, error code, and
/// user-facing message.
///
/// Upstream details are logged, never exposed: generation failures surface
/// to the client as a generic service-unavailable message, timeouts and
/// cancellations as their own codes.
fn classify_genai_error(err: &GenAiError) -> (StatusCode, &'static str, String) {
    match err {
        GenAiError::Timeout(secs) => (
            StatusCode::GATEWAY_TIMEOUT,
            "GENERATION_TIMEOUT",
            format!("Generation did not complete within {secs} seconds"),
        ),
        GenAiError::Cancelled => (
            StatusCode::CONFLICT,
            "GENERATION_CANCELLED",
            "Generation was cancelled".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Generative API error");
            (
                StatusCode::BAD_GATEWAY,
                "GENERATION_FAILED",
                "AI service unavailable".to_string(),
            )
        }
    }
}
