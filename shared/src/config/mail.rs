//! Mail sender configuration

use serde::Deserialize;
use std::fmt;

use super::{env_parse, env_string};

/// Which mail sender implementation to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MailProviderKind {
    /// SMTP relay with credentials
    Smtp,
    /// Log messages instead of delivering them
    #[default]
    Mock,
}

impl std::str::FromStr for MailProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "smtp" => Ok(MailProviderKind::Smtp),
            "mock" => Ok(MailProviderKind::Mock),
            _ => Err(format!("Unknown mail provider: {}", s)),
        }
    }
}

/// Mail sender configuration
#[derive(Clone, Deserialize)]
pub struct MailConfig {
    /// Selected implementation
    pub provider: MailProviderKind,
    /// SMTP relay host, e.g. `smtp.gmail.com`
    pub smtp_host: String,
    /// SMTP submission port (STARTTLS)
    pub smtp_port: u16,
    /// SMTP username
    pub username: String,
    /// SMTP password or app password
    pub password: String,
    /// Sender mailbox; defaults to the username
    pub from_address: String,
    /// Transport timeout in seconds
    pub timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: MailProviderKind::Mock,
            smtp_host: String::from("smtp.gmail.com"),
            smtp_port: 587,
            username: String::new(),
            password: String::new(),
            from_address: String::from("no-reply@localhost"),
            timeout_secs: 30,
        }
    }
}

impl MailConfig {
    /// Load from `MAIL_PROVIDER`, `SMTP_HOST`, `SMTP_PORT`, `SMTP_USERNAME`,
    /// `SMTP_PASSWORD`, `MAIL_FROM` and `SMTP_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let username = env_string("SMTP_USERNAME").unwrap_or(defaults.username);
        let from_address = env_string("MAIL_FROM").unwrap_or_else(|| {
            if username.is_empty() {
                defaults.from_address.clone()
            } else {
                username.clone()
            }
        });

        Self {
            provider: env_parse("MAIL_PROVIDER").unwrap_or(defaults.provider),
            smtp_host: env_string("SMTP_HOST").unwrap_or(defaults.smtp_host),
            smtp_port: env_parse("SMTP_PORT").unwrap_or(defaults.smtp_port),
            username,
            password: env_string("SMTP_PASSWORD").unwrap_or(defaults.password),
            from_address,
            timeout_secs: env_parse("SMTP_TIMEOUT_SECS").unwrap_or(defaults.timeout_secs),
        }
    }

    /// Whether SMTP credentials are present
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field("provider", &self.provider)
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("from_address", &self.from_address)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
