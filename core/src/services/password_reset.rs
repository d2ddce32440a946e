//! Password reset placeholder
//!
//! Records that a reset was requested and reports success. There is no
//! credential store behind it and no link to OTP verification; callers are
//! not required to have verified a code first.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

use sb_shared::utils::masking::mask_email;

use crate::errors::DomainResult;
use crate::services::clock::{Clock, SystemClock};

/// Outcome of a password reset request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordResetResult {
    pub identifier: String,
    pub requested_at: DateTime<Utc>,
}

/// Accepts password resets without persisting them
pub struct PasswordResetService<C: Clock + ?Sized = SystemClock> {
    clock: Arc<C>,
}

impl PasswordResetService<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }
}

impl Default for PasswordResetService<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock + ?Sized> PasswordResetService<C> {
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self { clock }
    }

    /// Log the reset event and report success.
    ///
    /// The new credential is never logged or stored.
    pub fn reset_password(
        &self,
        identifier: &str,
        new_password: &str,
    ) -> DomainResult<PasswordResetResult> {
        let requested_at = self.clock.now();

        info!(
            identifier = %mask_email(identifier),
            password_length = new_password.chars().count(),
            requested_at = %requested_at,
            "Password reset requested"
        );

        Ok(PasswordResetResult {
            identifier: identifier.to_string(),
            requested_at,
        })
    }
}
