//! OTP lifecycle configuration

use serde::{Deserialize, Serialize};

use super::{env_flag, env_parse};

/// How long an issued code stays valid (5 minutes)
pub const DEFAULT_OTP_TTL_SECONDS: i64 = 300;

/// Longest accepted code lifetime (one day)
pub const MAX_OTP_TTL_SECONDS: i64 = 86_400;

/// Longest accepted cleanup interval (one day)
pub const MAX_CLEANUP_INTERVAL_SECONDS: u64 = 86_400;

/// Longest accepted retention of expired records (one week)
pub const MAX_RETENTION_SECONDS: i64 = 604_800;

/// OTP lifecycle configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Seconds between issuance and expiry
    pub ttl_seconds: i64,

    /// Remove the record after the first successful verification
    #[serde(default)]
    pub single_use: bool,

    /// Seconds between expired-record cleanup runs (0 disables cleanup)
    pub cleanup_interval_seconds: u64,

    /// Seconds an expired record is kept so callers still see "expired"
    pub retention_seconds: i64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: DEFAULT_OTP_TTL_SECONDS,
            single_use: false,
            cleanup_interval_seconds: 60,
            retention_seconds: 300,
        }
    }
}

impl OtpConfig {
    /// Load from `OTP_TTL_SECONDS`, `OTP_SINGLE_USE`,
    /// `OTP_CLEANUP_INTERVAL_SECONDS` and `OTP_RETENTION_SECONDS`
    ///
    /// Values outside `1..=MAX_OTP_TTL_SECONDS`, `0..=MAX_CLEANUP_INTERVAL_SECONDS`
    /// and `0..=MAX_RETENTION_SECONDS` fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            ttl_seconds: env_parse("OTP_TTL_SECONDS")
                .filter(|ttl: &i64| (1..=MAX_OTP_TTL_SECONDS).contains(ttl))
                .unwrap_or(defaults.ttl_seconds),
            single_use: env_flag("OTP_SINGLE_USE").unwrap_or(defaults.single_use),
            cleanup_interval_seconds: env_parse("OTP_CLEANUP_INTERVAL_SECONDS")
                .filter(|secs: &u64| *secs <= MAX_CLEANUP_INTERVAL_SECONDS)
                .unwrap_or(defaults.cleanup_interval_seconds),
            retention_seconds: env_parse("OTP_RETENTION_SECONDS")
                .filter(|secs: &i64| (0..=MAX_RETENTION_SECONDS).contains(secs))
                .unwrap_or(defaults.retention_seconds),
        }
    }

    /// Whether the background cleanup should run at all
    pub fn cleanup_enabled(&self) -> bool {
        self.cleanup_interval_seconds > 0
    }
}
