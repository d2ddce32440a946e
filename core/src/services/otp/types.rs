//! Types for OTP service results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::OtpRecord;

/// What the mail sender reported after accepting a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryInfo {
    /// Provider message identifier
    pub message_id: String,
    /// Raw provider response, e.g. the SMTP reply line
    pub response: String,
}

/// Result of issuing a code
#[derive(Debug, Clone)]
pub struct IssueOtpResult {
    /// The record that is now stored
    pub record: OtpRecord,
    /// Delivery outcome from the mail sender
    pub delivery: DeliveryInfo,
}

/// Result of a successful verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyOtpResult {
    /// Expiry of the verified code
    pub expires_at: DateTime<Utc>,
    /// Whether the record was removed (single-use mode)
    pub consumed: bool,
}
