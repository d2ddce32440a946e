//! One-time password record for email-based verification.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of the one-time password
pub const CODE_LENGTH: usize = 6;

/// Smallest code that can be issued
pub const CODE_MIN: u32 = 100_000;

/// Largest code that can be issued
pub const CODE_MAX: u32 = 999_999;

/// Default lifetime of an issued code (5 minutes)
pub const DEFAULT_EXPIRATION_SECONDS: i64 = 300;

/// A one-time password issued to an identifier (an email address).
///
/// At most one record exists per identifier; issuing again replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// The 6-digit code
    pub code: String,

    /// Identifier the code was issued to, also the store key
    pub issued_to: String,

    /// Instant after which the code is no longer accepted
    pub expires_at: DateTime<Utc>,
}

impl OtpRecord {
    /// Issues a record with a freshly generated code.
    ///
    /// # Arguments
    ///
    /// * `issued_to` - The identifier the code belongs to
    /// * `now` - Issuance instant
    /// * `ttl` - How long the code stays valid
    ///
    /// Returns `None` when `now + ttl` is not a representable instant.
    pub fn issue(issued_to: impl Into<String>, now: DateTime<Utc>, ttl: Duration) -> Option<Self> {
        let expires_at = now.checked_add_signed(ttl)?;
        Some(Self::with_code(issued_to, Self::generate_code(), expires_at))
    }

    /// Builds a record around a known code.
    pub fn with_code(
        issued_to: impl Into<String>,
        code: impl Into<String>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            code: code.into(),
            issued_to: issued_to.into(),
            expires_at,
        }
    }

    /// Generates a uniformly random code in `[100000, 999999]`.
    ///
    /// The range keeps every code at exactly six digits.
    pub fn generate_code() -> String {
        let code: u32 = rand::thread_rng().gen_range(CODE_MIN..=CODE_MAX);
        code.to_string()
    }

    /// A record is expired strictly after `expires_at`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Exact comparison against a candidate code, no normalization.
    pub fn matches(&self, candidate: &str) -> bool {
        constant_time_eq(self.code.as_bytes(), candidate.as_bytes())
    }
}
