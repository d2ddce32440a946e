//! Main OTP service implementation

use std::sync::Arc;
use tracing::{debug, info, warn};

use sb_shared::utils::masking::mask_email;

use crate::domain::entities::OtpRecord;
use crate::errors::{Collaborator, DomainError, DomainResult, OtpError};
use crate::services::clock::{Clock, SystemClock};

use super::config::OtpServiceConfig;
use super::traits::{MailSender, OtpStore};
use super::types::{IssueOtpResult, VerifyOtpResult};

/// OTP service for issuing and verifying email codes
pub struct OtpService<M, S, C = SystemClock>
where
    M: MailSender + ?Sized,
    S: OtpStore + ?Sized,
    C: Clock + ?Sized,
{
    /// Mail sender used to deliver codes
    mail_sender: Arc<M>,
    /// Record storage
    store: Arc<S>,
    /// Time source for issuance and expiry checks
    clock: Arc<C>,
    /// Service configuration
    config: OtpServiceConfig,
}

impl<M: MailSender + ?Sized, S: OtpStore + ?Sized> OtpService<M, S, SystemClock> {
    /// Create a new OTP service on the wall clock
    ///
    /// # Arguments
    ///
    /// * `mail_sender` - Mail sender implementation
    /// * `store` - OTP store implementation
    /// * `config` - Service configuration
    pub fn new(mail_sender: Arc<M>, store: Arc<S>, config: OtpServiceConfig) -> Self {
        Self::with_clock(mail_sender, store, Arc::new(SystemClock), config)
    }
}

impl<M, S, C> OtpService<M, S, C>
where
    M: MailSender + ?Sized,
    S: OtpStore + ?Sized,
    C: Clock + ?Sized,
{
    /// Create a new OTP service with an explicit clock
    pub fn with_clock(
        mail_sender: Arc<M>,
        store: Arc<S>,
        clock: Arc<C>,
        config: OtpServiceConfig,
    ) -> Self {
        Self {
            mail_sender,
            store,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &OtpServiceConfig {
        &self.config
    }

    /// Issue a code to an identifier and deliver it by email
    ///
    /// The record is stored before delivery and stays stored when delivery
    /// fails, so the code can still be verified.
    ///
    /// # Returns
    ///
    /// * `Ok(IssueOtpResult)` - The stored record and the delivery outcome
    /// * `Err(DomainError::Validation)` - Empty identifier
    /// * `Err(DomainError::Internal)` - The configured lifetime overflows the clock
    /// * `Err(DomainError::CollaboratorFailure)` - Mail sender rejected the message
    pub async fn issue(&self, identifier: &str) -> DomainResult<IssueOtpResult> {
        if identifier.is_empty() {
            return Err(DomainError::Validation {
                message: "email is required".to_string(),
            });
        }

        let masked = mask_email(identifier);
        let record = self
            .config
            .ttl()
            .and_then(|ttl| OtpRecord::issue(identifier, self.clock.now(), ttl))
            .ok_or_else(|| {
                DomainError::internal(format!(
                    "OTP lifetime of {}s cannot be applied",
                    self.config.ttl_seconds
                ))
            })?;

        let replaced = self
            .store
            .put(record.clone())
            .await
            .map_err(DomainError::internal)?;
        if replaced.is_some() {
            debug!(identifier = %masked, "Replaced previously issued OTP");
        }

        let body = self.config.message_body(&record.code);
        match self
            .mail_sender
            .send(identifier, &self.config.subject, &body)
            .await
        {
            Ok(delivery) => {
                info!(
                    identifier = %masked,
                    provider = self.mail_sender.provider_name(),
                    message_id = %delivery.message_id,
                    expires_at = %record.expires_at,
                    "OTP issued and delivered"
                );
                Ok(IssueOtpResult { record, delivery })
            }
            Err(message) => {
                warn!(
                    identifier = %masked,
                    provider = self.mail_sender.provider_name(),
                    error = %message,
                    "OTP stored but delivery failed"
                );
                Err(DomainError::collaborator(Collaborator::MailSender, message))
            }
        }
    }

    /// Verify a candidate code
    ///
    /// Checks run in order: a record exists, it has not expired, the code
    /// matches exactly. Unless single-use mode is on, the record is left in
    /// place and the same code keeps verifying until it expires.
    pub async fn verify(&self, identifier: &str, candidate: &str) -> DomainResult<VerifyOtpResult> {
        self.verify_candidate(identifier, Some(candidate)).await
    }

    /// Same as [`verify`](Self::verify), for callers whose candidate may not
    /// be text at all.
    ///
    /// `None` never matches, but the record lookup and expiry check still
    /// come first.
    pub async fn verify_candidate(
        &self,
        identifier: &str,
        candidate: Option<&str>,
    ) -> DomainResult<VerifyOtpResult> {
        let masked = mask_email(identifier);

        let record = self
            .store
            .get(identifier)
            .await
            .map_err(DomainError::internal)?
            .ok_or_else(|| {
                debug!(identifier = %masked, "No OTP on record");
                OtpError::NotFound
            })?;

        if record.is_expired_at(self.clock.now()) {
            debug!(identifier = %masked, expires_at = %record.expires_at, "OTP expired");
            return Err(OtpError::Expired.into());
        }

        if !candidate.is_some_and(|code| record.matches(code)) {
            debug!(identifier = %masked, "OTP mismatch");
            return Err(OtpError::Mismatch.into());
        }

        let consumed = if self.config.single_use {
            // A concurrent verification or re-issue got there first
            if !self
                .store
                .consume(identifier, &record.code)
                .await
                .map_err(DomainError::internal)?
            {
                return Err(OtpError::NotFound.into());
            }
            true
        } else {
            false
        };

        info!(identifier = %masked, consumed, "OTP verified");

        Ok(VerifyOtpResult {
            expires_at: record.expires_at,
            consumed,
        })
    }
}
