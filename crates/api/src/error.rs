use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use meddx_aivm::AivmError;
use meddx_core::error::CoreError;
use meddx_translate::TranslateError;

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain and collaborator errors and implements
/// [`IntoResponse`] to produce consistent `{"message": ...}` JSON
/// bodies. The diagnosis handlers catch inference failures themselves
/// to emit their endpoint-specific fixed messages; everything reaching
/// this type is the "unhandled failure" path.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `meddx_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure talking to the AIVM inference service.
    #[error(transparent)]
    Inference(#[from] AivmError),

    /// A failure talking to the translation service.
    #[error(transparent)]
    Translation(#[from] TranslateError),

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
        let (status, message) = match &self {
            AppError::Core(core) => {
                tracing::error!(error = %core, "Internal core error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
            AppError::Inference(err) => {
                tracing::error!(error = %err, "AIVM inference error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
            AppError::Translation(err) => {
                tracing::error!(error = %err, "Translation service error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({ "message": message });

        (status, axum::Json(body)).into_response()
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}
