//! Domain-specific error types and error handling.

mod types;

pub use types::{Collaborator, NotificationError, OtpError};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    Otp(#[from] OtpError),

    #[error(transparent)]
    Notification(#[from] NotificationError),

    /// Mail sender or push provider failed; the message is passed through
    #[error("{collaborator} failure: {message}")]
    CollaboratorFailure {
        collaborator: Collaborator,
        message: String,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    pub fn collaborator(collaborator: Collaborator, message: impl Into<String>) -> Self {
        DomainError::CollaboratorFailure {
            collaborator,
            message: message.into(),
        }
    }

    /// Whether the caller, rather than the service, is at fault
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DomainError::Otp(_) | DomainError::Notification(_) | DomainError::Validation { .. }
        )
    }

    /// The message shown to API clients.
    ///
    /// Collaborator failures surface the underlying message only.
    pub fn public_message(&self) -> String {
        match self {
            DomainError::CollaboratorFailure { message, .. } => message.clone(),
            DomainError::Validation { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
