use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use contracts::usecases::common::UseCaseError;

use super::remote::RemoteError;

/// Ошибки сервисного слоя; обработчики превращают их в HTTP-ответ
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Login required")]
    Unauthorized,

    #[error("Not allowed: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("Export failed: {0}")]
    Export(String),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Unauthorized => StatusCode::UNAUTHORIZED,
            ServiceError::Forbidden(_) => StatusCode::FORBIDDEN,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Remote(RemoteError::NotConfigured) => StatusCode::SERVICE_UNAVAILABLE,
            ServiceError::Remote(_) => StatusCode::BAD_GATEWAY,
            ServiceError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<csv::Error> for ServiceError {
    fn from(e: csv::Error) -> Self {
        ServiceError::Export(e.to_string())
    }
}

impl From<UseCaseError> for ServiceError {
    fn from(e: UseCaseError) -> Self {
        if e.is_validation() {
            ServiceError::Validation(e.message)
        } else if e.is_forbidden() {
            ServiceError::Forbidden(e.message)
        } else {
            ServiceError::Remote(RemoteError::Api(e.message))
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }
        (status, Json(json!({ "success": false, "error": self.to_string() }))).into_response()
    }
}
