//! Firebase Cloud Messaging HTTP v1 push provider

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use sb_core::domain::entities::PushMessage;
use sb_core::services::notification::PushProvider;
use sb_shared::utils::masking::mask_token;
use sb_shared::PushConfig;

use super::service_account::{AccessTokenProvider, ServiceAccountKey};
use crate::InfrastructureError;

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    message: FcmMessage<'a>,
}

#[derive(Debug, Serialize)]
struct FcmMessage<'a> {
    token: &'a str,
    notification: FcmNotification<'a>,
    data: &'a HashMap<String, String>,
}

#[derive(Debug, Serialize)]
struct FcmNotification<'a> {
    title: &'a str,
    body: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    #[allow(dead_code)]
    status: Option<String>,
}

/// Push provider that talks to `projects/{id}/messages:send`
pub struct FcmPushProvider {
    client: Client,
    tokens: AccessTokenProvider,
    send_url: String,
}

impl FcmPushProvider {
    /// Load the service account named by `FCM_SERVICE_ACCOUNT_PATH`
    pub fn new(config: &PushConfig) -> Result<Self, InfrastructureError> {
        let path = config.service_account_path.as_deref().ok_or_else(|| {
            InfrastructureError::Config("FCM_SERVICE_ACCOUNT_PATH is not set".to_string())
        })?;
        let key = ServiceAccountKey::from_file(path)?;
        Self::with_key(key, config)
    }

    pub fn with_key(key: ServiceAccountKey, config: &PushConfig) -> Result<Self, InfrastructureError> {
        let project_id = config
            .project_id
            .clone()
            .unwrap_or_else(|| key.project_id.clone());
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        let send_url = format!(
            "{}/v1/projects/{}/messages:send",
            config.endpoint.trim_end_matches('/'),
            project_id
        );
        let tokens = AccessTokenProvider::new(key, client.clone())?;

        Ok(Self {
            client,
            tokens,
            send_url,
        })
    }

    pub fn send_url(&self) -> &str {
        &self.send_url
    }

    async fn deliver(&self, message: &PushMessage) -> Result<String, InfrastructureError> {
        let access_token = self.tokens.access_token().await?;
        let payload = request_body(message);

        info!(token = %mask_token(&message.token), "Sending FCM message");

        let response = self
            .client
            .post(&self.send_url)
            .bearer_auth(access_token)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            error!("FCM send failed {}: {}", status, body);
            return Err(InfrastructureError::Push(error_message(status, &body)));
        }

        let sent: SendResponse = response.json().await?;
        info!(name = %sent.name, "FCM message accepted");
        Ok(sent.name)
    }
}

fn request_body(message: &PushMessage) -> SendRequest<'_> {
    SendRequest {
        message: FcmMessage {
            token: &message.token,
            notification: FcmNotification {
                title: &message.title,
                body: &message.body,
            },
            data: &message.data,
        },
    }
}

/// The provider's own `error.message`, or a status line when the body is not JSON
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| format!("FCM request failed with status {}", status))
}

#[async_trait]
impl PushProvider for FcmPushProvider {
    async fn send(&self, message: &PushMessage) -> Result<String, String> {
        self.deliver(message).await.map_err(|e| match e {
            InfrastructureError::Push(msg) => msg,
            other => other.to_string(),
        })
    }

    fn provider_name(&self) -> &str {
        "FCM"
    }
}
