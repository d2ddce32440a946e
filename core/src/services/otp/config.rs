//! Configuration for the OTP service

use chrono::Duration;
use sb_shared::config::OtpConfig;

use crate::domain::entities::otp_record::DEFAULT_EXPIRATION_SECONDS;

/// Subject line of the OTP email
pub const DEFAULT_SUBJECT: &str = "Your OTP Code";

/// Configuration for the OTP service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Seconds between issuance and expiry
    pub ttl_seconds: i64,
    /// Remove the record after the first successful verification
    pub single_use: bool,
    /// Subject line of the delivered email
    pub subject: String,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: DEFAULT_EXPIRATION_SECONDS,
            single_use: false,
            subject: DEFAULT_SUBJECT.to_string(),
        }
    }
}

impl From<&OtpConfig> for OtpServiceConfig {
    fn from(config: &OtpConfig) -> Self {
        Self {
            ttl_seconds: config.ttl_seconds,
            single_use: config.single_use,
            ..Default::default()
        }
    }
}

impl OtpServiceConfig {
    /// Code lifetime, or `None` when `ttl_seconds` is outside chrono's range
    pub fn ttl(&self) -> Option<Duration> {
        Duration::try_seconds(self.ttl_seconds)
    }

    /// Body of the delivered email
    pub fn message_body(&self, code: &str) -> String {
        format!("Your OTP is {}. It will expire in {}.", code, self.ttl_phrase())
    }

    fn ttl_phrase(&self) -> String {
        let secs = self.ttl_seconds;
        match (secs % 60, secs / 60) {
            (0, 1) => "1 minute".to_string(),
            (0, minutes) => format!("{} minutes", minutes),
            (_, _) if secs == 1 => "1 second".to_string(),
            _ => format!("{} seconds", secs),
        }
    }
}
