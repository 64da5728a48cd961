use aerodesk_core::CoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),
    #[error("{0}")]
    NotFoundError(String),
    /// The airline backend rejected or never answered a mutation.
    #[error("{0}")]
    BadGateway(String),
    /// A created passenger could not be found again.
    #[error("{0}")]
    ResolutionFailed(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadGateway(msg) => {
                tracing::error!("Backend request failed: {}", msg);
                (StatusCode::BAD_GATEWAY, msg)
            }
            AppError::ResolutionFailed(msg) => {
                tracing::error!("Passenger resolution failed: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    "The backend did not return the passenger record. Please try again.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ValidationError(msg) => AppError::ValidationError(msg),
            CoreError::NotFound(what) => AppError::NotFoundError(format!("{} not found", what)),
            err @ CoreError::RequestFailed { .. } => AppError::BadGateway(err.to_string()),
            err @ CoreError::PassengerResolutionFailed(_) => {
                AppError::ResolutionFailed(err.to_string())
            }
        }
    }
}
