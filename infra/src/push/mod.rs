//! Push Provider Module
//!
//! - **FCM**: Firebase Cloud Messaging HTTP v1 with service-account auth
//! - **Mock**: in-memory recorder for development

use std::sync::Arc;

use tracing::{info, warn};

use sb_core::services::notification::PushProvider;
use sb_shared::{PushConfig, PushProviderKind};

pub mod fcm;
pub mod mock_push;
pub mod service_account;

pub use fcm::FcmPushProvider;
pub use mock_push::MockPushProvider;
pub use service_account::{AccessTokenProvider, ServiceAccountKey};

/// Create a push provider based on configuration
///
/// An FCM provider whose service account cannot be loaded falls back to the
/// mock provider with a warning.
pub fn create_push_provider(config: &PushConfig) -> Arc<dyn PushProvider> {
    match config.provider {
        PushProviderKind::Mock => Arc::new(MockPushProvider::new()),
        PushProviderKind::Fcm => match FcmPushProvider::new(config) {
            Ok(provider) => {
                info!(url = %provider.send_url(), "Using FCM push provider");
                Arc::new(provider)
            }
            Err(e) => {
                warn!("Failed to initialize FCM push provider: {}, falling back to mock", e);
                Arc::new(MockPushProvider::new())
            }
        },
    }
}
