use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use backoffice_core::DomainError;

use crate::response::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),
    
    #[error("Bad request: {0}")]
    BadRequest(String),
    
    #[error("Conflict: {0}")]
    Conflict(String),
    
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::MenuItemNotFound(_) => ApiError::NotFound(err.to_string()),
            DomainError::ValidationError(_) | DomainError::InvalidCategory(_) => {
                ApiError::BadRequest(err.to_string())
            }
            DomainError::ModalNotOpen(_) | DomainError::SubmissionInFlight(_) => {
                ApiError::Conflict(err.to_string())
            }
            DomainError::OperationFailed(_) => ApiError::InternalError(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, "NOT_FOUND", msg)
            },
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)
            },
            ApiError::Conflict(msg) => {
                tracing::warn!("Conflict: {}", msg);
                (StatusCode::CONFLICT, "CONFLICT", msg)
            },
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                // Detail stays in the log, the client gets a generic message
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "OPERATION_FAILED",
                    "Operation failed. Please try again.".to_string(),
                )
            },
        };
        
        (status, Json(ApiResponse::<()>::error(code, &message))).into_response()
    }
}
