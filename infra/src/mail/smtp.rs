//! SMTP Mail Sender
//!
//! Delivers plain-text mail through an authenticated SMTP relay using
//! `lettre`'s tokio transport. Port 465 uses implicit TLS, every other port
//! uses STARTTLS.

use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{error, info};
use uuid::Uuid;

use sb_core::services::otp::{DeliveryInfo, MailSender};
use sb_shared::utils::masking::mask_email;
use sb_shared::MailConfig;

use crate::InfrastructureError;

const IMPLICIT_TLS_PORT: u16 = 465;

/// SMTP-backed [`MailSender`]
pub struct SmtpMailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailSender {
    /// Build the transport; no connection is opened until the first send
    pub fn new(config: &MailConfig) -> Result<Self, InfrastructureError> {
        let from: Mailbox = config.from_address.parse().map_err(|e| {
            InfrastructureError::Config(format!(
                "Invalid MAIL_FROM address '{}': {}",
                config.from_address, e
            ))
        })?;

        let builder = if config.smtp_port == IMPLICIT_TLS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
        }
        .map_err(|e| InfrastructureError::Config(format!("Invalid SMTP relay: {}", e)))?;

        let transport = builder
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .timeout(Some(Duration::from_secs(config.timeout_secs)))
            .build();

        Ok(Self { transport, from })
    }

    fn build_message(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<(Message, String), InfrastructureError> {
        let recipient: Mailbox = to.parse().map_err(|e| {
            InfrastructureError::Mail(format!("Invalid recipient address: {}", e))
        })?;

        let message_id = format!("<{}@{}>", Uuid::new_v4(), self.from.email.domain());
        let message = Message::builder()
            .from(self.from.clone())
            .to(recipient)
            .subject(subject)
            .message_id(Some(message_id.clone()))
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| InfrastructureError::Mail(e.to_string()))?;

        Ok((message, message_id))
    }
}

#[async_trait]
impl MailSender for SmtpMailSender {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<DeliveryInfo, String> {
        let masked = mask_email(to);
        let (message, message_id) = self
            .build_message(to, subject, body)
            .map_err(|e| e.to_string())?;

        match self.transport.send(message).await {
            Ok(response) => {
                let text = response
                    .message()
                    .map(|line| line.to_string())
                    .collect::<Vec<String>>()
                    .join(" ");
                let summary = format!("{} {}", response.code(), text);

                info!(
                    target: "mail_sender",
                    provider = "smtp",
                    recipient = %masked,
                    message_id = %message_id,
                    "Mail sent successfully"
                );

                Ok(DeliveryInfo {
                    message_id,
                    response: summary.trim_end().to_string(),
                })
            }
            Err(e) => {
                error!(recipient = %masked, "SMTP delivery failed: {}", e);
                Err(e.to_string())
            }
        }
    }

    fn provider_name(&self) -> &str {
        "SMTP"
    }
}
