//! Configuration module with service-specific sub-modules
//!
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP bind address and CORS configuration
//! - `otp` - OTP lifetime, single-use mode and cleanup cadence
//! - `mail` - Mail sender selection and SMTP credentials
//! - `push` - Push provider selection and FCM credentials
//!
//! Every type exposes a `from_env()` constructor that falls back to its
//! `Default` for any variable that is unset or unparsable.

pub mod environment;
pub mod mail;
pub mod otp;
pub mod push;
pub mod server;

use std::env;
use std::str::FromStr;

pub use environment::{Environment, LoggingConfig};
pub use mail::{MailConfig, MailProviderKind};
pub use otp::OtpConfig;
pub use push::{PushConfig, PushProviderKind};
pub use server::{CorsConfig, ServerConfig};

/// Read and parse an environment variable, ignoring unset or malformed values.
pub(crate) fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Read a non-empty environment variable.
pub(crate) fn env_string(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parse the usual truthy spellings used in `.env` files.
pub(crate) fn env_flag(key: &str) -> Option<bool> {
    env::var(key).ok().map(|v| {
        matches!(
            v.trim().to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}
