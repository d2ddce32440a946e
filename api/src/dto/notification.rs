use serde::{Deserialize, Serialize};

use sb_core::domain::entities::NotificationRequest;

/// Relay request as received; field checks happen in the notification service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SendNotificationRequest {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    /// Flat map of string values; anything else is rejected
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl From<SendNotificationRequest> for NotificationRequest {
    fn from(request: SendNotificationRequest) -> Self {
        NotificationRequest {
            token: request.token,
            title: request.title,
            body: request.body,
            data: request.data,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendNotificationResponse {
    pub success: bool,
    /// Provider response, e.g. `projects/<id>/messages/<message-id>`
    pub response: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationErrorResponse {
    pub error: String,
}
