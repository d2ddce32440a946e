//! Push provider integration trait

use async_trait::async_trait;

use crate::domain::entities::PushMessage;

/// Trait for push messaging provider integration
#[async_trait]
pub trait PushProvider: Send + Sync {
    /// Deliver a message, returning the provider's response verbatim
    async fn send(&self, message: &PushMessage) -> Result<String, String>;
    /// Name of the underlying provider, for logs
    fn provider_name(&self) -> &str;
}
