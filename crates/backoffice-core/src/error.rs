//! Domain errors

use thiserror::Error;

use crate::viewmodel::ModalKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Menu item not found: {0}")]
    MenuItemNotFound(String),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),

    #[error("{0} modal is not open")]
    ModalNotOpen(ModalKind),

    #[error("{0} modal is still submitting")]
    SubmissionInFlight(ModalKind),
}

impl DomainError {
    /// Message safe to show in a form banner. Operation failures stay generic.
    pub fn user_message(&self) -> String {
        match self {
            DomainError::OperationFailed(_) => "Operation failed. Please try again.".to_string(),
            other => other.to_string(),
        }
    }
}
