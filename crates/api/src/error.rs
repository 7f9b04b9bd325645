use axum::extract::rejection::{BytesRejection, JsonRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rentml_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `rentml_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request body could not be extracted as the expected JSON shape.
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),

    /// The request body could not be read.
    #[error(transparent)]
    UnreadableBody(#[from] BytesRejection),

    /// A body sent without `Content-Type` did not decode as the expected JSON.
    #[error("Failed to parse the request body as JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // Keeps the extractor's own status (400, 415 or 422).
            AppError::InvalidBody(rejection) => {
                (rejection.status(), "INVALID_BODY", rejection.body_text())
            }
            AppError::UnreadableBody(rejection) => {
                (rejection.status(), "INVALID_BODY", rejection.body_text())
            }

            // Same split as axum's extractor: bad syntax is 400, wrong shape 422.
            AppError::MalformedJson(err) => {
                let status = match err.classify() {
                    serde_json::error::Category::Data => StatusCode::UNPROCESSABLE_ENTITY,
                    _ => StatusCode::BAD_REQUEST,
                };
                (status, "INVALID_BODY", self.to_string())
            }
        };

        tracing::warn!(status = %status, code, error = %message, "Request rejected");

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
