//! Mock Push Provider
//!
//! Records messages in memory and answers with a message name shaped like
//! the ones FCM returns.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use uuid::Uuid;

use sb_core::domain::entities::PushMessage;
use sb_core::services::notification::PushProvider;
use sb_shared::utils::masking::mask_token;

/// Mock push provider for development and testing
#[derive(Clone, Default)]
pub struct MockPushProvider {
    message_count: Arc<AtomicU64>,
    sent: Arc<Mutex<Vec<PushMessage>>>,
    simulate_failure: bool,
}

impl MockPushProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider whose every send fails
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::default()
        }
    }

    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Messages accepted so far, oldest first
    pub fn sent_messages(&self) -> Vec<PushMessage> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl PushProvider for MockPushProvider {
    async fn send(&self, message: &PushMessage) -> Result<String, String> {
        let masked = mask_token(&message.token);

        if self.simulate_failure {
            warn!(token = %masked, "Mock push provider simulating failure");
            return Err("Simulated push delivery failure".to_string());
        }

        let name = format!("projects/mock/messages/{}", Uuid::new_v4());
        self.message_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(message.clone());
        }

        info!(
            target: "push_provider",
            provider = "mock",
            token = %masked,
            name = %name,
            "Push message sent successfully (mock)"
        );

        Ok(name)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
