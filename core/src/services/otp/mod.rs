//! OTP service module for email-based verification
//!
//! This module provides the one-time-password lifecycle:
//! - Code generation and delivery through a mail sender
//! - Storage keyed by identifier, replacing any previous code
//! - Verification against expiry and the stored code
//! - Background removal of long-expired records

mod cleanup;
mod config;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use cleanup::{OtpCleanupConfig, OtpCleanupService};
pub use config::OtpServiceConfig;
pub use service::OtpService;
pub use traits::{MailSender, OtpStore};
pub use types::{DeliveryInfo, IssueOtpResult, VerifyOtpResult};
