//! Traits for mail delivery and OTP storage integration

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::OtpRecord;

use super::types::DeliveryInfo;

/// Trait for mail sender integration
#[async_trait]
pub trait MailSender: Send + Sync {
    /// Deliver a plain-text message
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<DeliveryInfo, String>;
    /// Name of the underlying provider, for logs
    fn provider_name(&self) -> &str;
}

/// Trait for OTP record storage.
///
/// Implementations must serialize operations on the same identifier and
/// must not block operations on other identifiers for longer than a
/// single map access.
#[async_trait]
pub trait OtpStore: Send + Sync {
    /// Store a record under `record.issued_to`, returning the one it replaced
    async fn put(&self, record: OtpRecord) -> Result<Option<OtpRecord>, String>;
    /// Fetch the record for an identifier
    async fn get(&self, identifier: &str) -> Result<Option<OtpRecord>, String>;
    /// Remove and return the record for an identifier
    async fn remove(&self, identifier: &str) -> Result<Option<OtpRecord>, String>;
    /// Remove the record only if it still holds `code`; returns whether it did
    async fn consume(&self, identifier: &str, code: &str) -> Result<bool, String>;
    /// Remove every record that expired before `cutoff`; returns how many
    async fn purge_expired(&self, cutoff: DateTime<Utc>) -> Result<usize, String>;
    /// Number of records currently held
    async fn len(&self) -> Result<usize, String>;
}
