//! Mail Sender Module
//!
//! Outbound email delivery for OTP codes. Two implementations are provided:
//!
//! - **SMTP**: authenticated relay through `lettre`'s async tokio transport
//! - **Mock**: console output for development, nothing leaves the process
//!
//! Recipient addresses are masked in every log line.

use std::sync::Arc;

use tracing::{info, warn};

use sb_core::services::otp::MailSender;
use sb_shared::{MailConfig, MailProviderKind};

pub mod mock_mail;
pub mod smtp;

pub use mock_mail::MockMailSender;
pub use smtp::SmtpMailSender;

/// Create a mail sender based on configuration
///
/// An SMTP provider without credentials, or one whose transport cannot be
/// built, falls back to the mock sender with a warning.
pub fn create_mail_sender(config: &MailConfig) -> Arc<dyn MailSender> {
    match config.provider {
        MailProviderKind::Mock => Arc::new(MockMailSender::new()),
        MailProviderKind::Smtp => {
            if !config.has_credentials() {
                warn!("SMTP_USERNAME or SMTP_PASSWORD not set, falling back to mock mail sender");
                return Arc::new(MockMailSender::new());
            }

            match SmtpMailSender::new(config) {
                Ok(sender) => {
                    info!(
                        host = %config.smtp_host,
                        port = config.smtp_port,
                        "Using SMTP mail sender"
                    );
                    Arc::new(sender)
                }
                Err(e) => {
                    warn!("Failed to initialize SMTP mail sender: {}, falling back to mock", e);
                    Arc::new(MockMailSender::new())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_defaults_to_mock() {
        let sender = create_mail_sender(&MailConfig::default());
        assert_eq!(sender.provider_name(), "Mock");
    }

    #[test]
    fn test_factory_falls_back_without_credentials() {
        let config = MailConfig {
            provider: MailProviderKind::Smtp,
            ..Default::default()
        };
        let sender = create_mail_sender(&config);
        assert_eq!(sender.provider_name(), "Mock");
    }

    #[test]
    fn test_factory_builds_smtp_sender() {
        let config = MailConfig {
            provider: MailProviderKind::Smtp,
            username: "sender@example.com".to_string(),
            password: "app-password".to_string(),
            from_address: "sender@example.com".to_string(),
            ..Default::default()
        };
        let sender = create_mail_sender(&config);
        assert_eq!(sender.provider_name(), "SMTP");
    }
}
