//! Shared configuration and utilities for the Skill Buddy services
//!
//! This crate provides functionality used by both the OTP service and the
//! notification relay:
//! - Environment-driven configuration types
//! - Masking helpers for identifiers that end up in logs

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    CorsConfig, Environment, LoggingConfig, MailConfig, MailProviderKind, OtpConfig, PushConfig,
    PushProviderKind, ServerConfig,
};
pub use utils::masking;
