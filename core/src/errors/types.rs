//! Error kinds for the OTP lifecycle and the notification relay

use std::fmt;
use thiserror::Error;

/// Reasons an OTP verification fails.
///
/// The messages double as the client-facing text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpError {
    #[error("No OTP found")]
    NotFound,

    #[error("OTP expired")]
    Expired,

    #[error("Invalid OTP")]
    Mismatch,
}

/// Notification relay request errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotificationError {
    #[error("{message}")]
    InvalidRequest { message: String },
}

/// External collaborator that produced a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    MailSender,
    PushProvider,
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collaborator::MailSender => write!(f, "mail sender"),
            Collaborator::PushProvider => write!(f, "push provider"),
        }
    }
}
