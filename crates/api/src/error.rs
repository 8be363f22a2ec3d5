use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracker_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `tracker_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": format!("{entity} with id {id} not found"),
                    "code": "NOT_FOUND",
                }),
            ),
            AppError::Core(CoreError::Validation(fields)) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Validation failed",
                    "code": "VALIDATION_ERROR",
                    "fields": fields,
                }),
            ),
            AppError::Core(CoreError::Infrastructure(msg)) => {
                tracing::error!(error = %msg, "Infrastructure error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "An internal error occurred",
                        "code": "INTERNAL_ERROR",
                    }),
                )
            }
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": msg,
                    "code": "BAD_REQUEST",
                }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
