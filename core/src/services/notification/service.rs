//! Notification relay service implementation

use std::sync::Arc;
use tracing::{info, warn};

use sb_shared::utils::masking::mask_token;

use crate::domain::entities::{NotificationRequest, PushMessage};
use crate::errors::{Collaborator, DomainError, DomainResult};

use super::traits::PushProvider;

/// Relays validated notifications to a push provider
pub struct NotificationService<P: PushProvider + ?Sized> {
    provider: Arc<P>,
}

impl<P: PushProvider + ?Sized> NotificationService<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Validate and forward a notification
    ///
    /// # Returns
    ///
    /// * `Ok(response)` - The provider's response, untouched
    /// * `Err(DomainError::Notification)` - A required field is missing; the
    ///   provider is not called
    /// * `Err(DomainError::CollaboratorFailure)` - The provider rejected the
    ///   message, or `data` is not a map of strings
    pub async fn send(&self, request: NotificationRequest) -> DomainResult<String> {
        let message = PushMessage::try_from(request)?;
        self.forward(&message).await
    }

    /// Forward an already validated message
    pub async fn forward(&self, message: &PushMessage) -> DomainResult<String> {
        let token = mask_token(&message.token);

        match self.provider.send(message).await {
            Ok(response) => {
                info!(
                    token = %token,
                    provider = self.provider.provider_name(),
                    data_keys = message.data.len(),
                    "Notification relayed"
                );
                Ok(response)
            }
            Err(error) => {
                warn!(
                    token = %token,
                    provider = self.provider.provider_name(),
                    error = %error,
                    "Push provider rejected notification"
                );
                Err(DomainError::collaborator(Collaborator::PushProvider, error))
            }
        }
    }
}
