//! Push provider configuration

use serde::Deserialize;

use super::{env_parse, env_string};

/// Default Firebase Cloud Messaging API origin
pub const DEFAULT_FCM_ENDPOINT: &str = "https://fcm.googleapis.com";

/// Which push provider implementation to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PushProviderKind {
    /// Firebase Cloud Messaging HTTP v1
    Fcm,
    /// Record messages instead of delivering them
    #[default]
    Mock,
}

impl std::str::FromStr for PushProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fcm" | "firebase" => Ok(PushProviderKind::Fcm),
            "mock" => Ok(PushProviderKind::Mock),
            _ => Err(format!("Unknown push provider: {}", s)),
        }
    }
}

/// Push provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PushConfig {
    /// Selected implementation
    pub provider: PushProviderKind,
    /// Path to the Google service-account JSON key
    pub service_account_path: Option<String>,
    /// Overrides the project id found in the service account
    pub project_id: Option<String>,
    /// API origin; only changed for tests and emulators
    pub endpoint: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            provider: PushProviderKind::Mock,
            service_account_path: None,
            project_id: None,
            endpoint: DEFAULT_FCM_ENDPOINT.to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl PushConfig {
    /// Load from `PUSH_PROVIDER`, `FCM_SERVICE_ACCOUNT_PATH`
    /// (or `GOOGLE_APPLICATION_CREDENTIALS`), `FCM_PROJECT_ID`,
    /// `FCM_ENDPOINT` and `FCM_REQUEST_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: env_parse("PUSH_PROVIDER").unwrap_or(defaults.provider),
            service_account_path: env_string("FCM_SERVICE_ACCOUNT_PATH")
                .or_else(|| env_string("GOOGLE_APPLICATION_CREDENTIALS")),
            project_id: env_string("FCM_PROJECT_ID"),
            endpoint: env_string("FCM_ENDPOINT").unwrap_or(defaults.endpoint),
            request_timeout_secs: env_parse("FCM_REQUEST_TIMEOUT_SECS")
                .unwrap_or(defaults.request_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_parsing() {
        assert_eq!("firebase".parse::<PushProviderKind>().unwrap(), PushProviderKind::Fcm);
        assert_eq!("FCM".parse::<PushProviderKind>().unwrap(), PushProviderKind::Fcm);
        assert!("apns".parse::<PushProviderKind>().is_err());
    }

    #[test]
    fn test_default_endpoint() {
        assert_eq!(PushConfig::default().endpoint, "https://fcm.googleapis.com");
    }
}
