//! Error types for the equipment tracker

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Stable numeric error codes returned to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    NotAuthorized = 2,
    NoSuchItem = 5,
    Duplicate = 8,
    BadValue = 18,
    InvalidTransition = 22,
}

/// Main application error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authorization failed: {0}")]
    Authorization(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Code and HTTP status for this error kind
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::NotFound(_) => ErrorCode::NoSuchItem,
            AppError::Conflict(_) => ErrorCode::Duplicate,
            AppError::InvalidTransition(_) => ErrorCode::InvalidTransition,
            AppError::Validation(_) => ErrorCode::BadValue,
            AppError::Authorization(_) => ErrorCode::NotAuthorized,
            AppError::Internal(_) => ErrorCode::Failure,
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::InvalidTransition(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Authorization(_) => StatusCode::FORBIDDEN,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            AppError::NotFound(msg)
            | AppError::Conflict(msg)
            | AppError::InvalidTransition(msg)
            | AppError::Validation(msg)
            | AppError::Authorization(msg)
            | AppError::Internal(msg) => msg,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Error response body
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        let status = self.status();
        let message = match &self {
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
            other => other.message().to_string(),
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::Conflict("x".into()).status(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::InvalidTransition("x".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(AppError::Validation("x".into()).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_message_strips_kind() {
        let err = AppError::Conflict("Equipment X1 already exists".into());
        assert_eq!(err.message(), "Equipment X1 already exists");
        assert_eq!(err.to_string(), "Conflict: Equipment X1 already exists");
    }
}
