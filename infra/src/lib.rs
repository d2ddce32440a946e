//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborator traits defined in `sb_core`:
//!
//! - **Cache**: concurrent in-memory OTP store
//! - **Mail**: SMTP delivery through `lettre`, plus a logging mock
//! - **Push**: Firebase Cloud Messaging HTTP v1 through `reqwest`, plus a
//!   recording mock
//!
//! Providers are chosen from configuration by the `create_*` factories, which
//! fall back to the mocks when credentials are missing or invalid.

// Re-export core types for convenience
pub use sb_core::errors::*;

/// Cache module - in-memory OTP storage
pub mod cache;

/// Mail module - outbound email delivery
pub mod mail;

/// Push module - push notification delivery
pub mod push;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Reading credentials from disk failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON from disk or a provider
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Signing a service-account assertion failed
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail delivery error
    #[error("{0}")]
    Mail(String),

    /// Push delivery error, carrying the provider's own message
    #[error("{0}")]
    Push(String),
}
