//! Mock Mail Sender
//!
//! Prints messages to the console instead of delivering them. This is the
//! only place an OTP code is allowed to appear in process output, and it is
//! meant for local development only.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use sb_core::services::otp::{DeliveryInfo, MailSender};
use sb_shared::utils::masking::mask_email;

/// Mock mail sender for development and testing
///
/// This implementation:
/// - Prints each message to the console
/// - Rejects recipients without an `@`, as an SMTP relay would
/// - Generates mock message IDs
/// - Tracks message count for testing
#[derive(Clone)]
pub struct MockMailSender {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
    /// Whether to print messages to console
    console_output: bool,
}

impl MockMailSender {
    /// Create a new mock mail sender
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    /// Create a mock sender with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure,
            console_output,
        }
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&mut self, simulate: bool) {
        self.simulate_failure = simulate;
    }
}

impl Default for MockMailSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailSender for MockMailSender {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<DeliveryInfo, String> {
        let masked = mask_email(to);

        if !to.contains('@') {
            return Err(format!("Invalid recipient address: {}", masked));
        }

        if self.simulate_failure {
            warn!(recipient = %masked, "Mock mail sender simulating failure");
            return Err("Simulated mail delivery failure".to_string());
        }

        let message_id = format!("<mock_{}@localhost>", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK MAIL SENDER - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {}", to);
            println!("Subject: {}", subject);
            println!("Message ID: {}", message_id);
            println!("{}", body);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            target: "mail_sender",
            provider = "mock",
            recipient = %masked,
            message_id = %message_id,
            "Mail sent successfully (mock)"
        );

        Ok(DeliveryInfo {
            message_id,
            response: "250 OK (mock)".to_string(),
        })
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
