//! Periodic removal of expired OTP records
//!
//! Records are otherwise only replaced by a new issuance for the same
//! identifier, so without this task an identifier that never comes back
//! keeps its record forever.

use std::sync::Arc;
use std::time::Duration as StdDuration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info};

use sb_shared::config::OtpConfig;

use crate::errors::{DomainError, DomainResult};
use crate::services::clock::Clock;

use super::traits::OtpStore;

/// Configuration for OTP cleanup
#[derive(Debug, Clone)]
pub struct OtpCleanupConfig {
    /// How often to run cleanup (in seconds)
    pub interval_seconds: u64,
    /// Grace period after expiry before deletion (in seconds)
    pub retention_seconds: i64,
    /// Whether to enable automatic cleanup
    pub enabled: bool,
}

impl Default for OtpCleanupConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 60,
            retention_seconds: 300,
            enabled: true,
        }
    }
}

impl From<&OtpConfig> for OtpCleanupConfig {
    fn from(config: &OtpConfig) -> Self {
        Self {
            interval_seconds: config.cleanup_interval_seconds,
            retention_seconds: config.retention_seconds,
            enabled: config.cleanup_enabled(),
        }
    }
}

/// Service that purges expired records from an [`OtpStore`]
pub struct OtpCleanupService<S: OtpStore + ?Sized + 'static, C: Clock + ?Sized + 'static> {
    store: Arc<S>,
    clock: Arc<C>,
    config: OtpCleanupConfig,
}

impl<S: OtpStore + ?Sized + 'static, C: Clock + ?Sized + 'static> OtpCleanupService<S, C> {
    pub fn new(store: Arc<S>, clock: Arc<C>, config: OtpCleanupConfig) -> Self {
        Self {
            store,
            clock,
            config,
        }
    }

    /// Run a single cleanup cycle
    ///
    /// # Returns
    /// * `Ok(count)` - Number of records removed
    /// * `Err(DomainError)` - If the store fails or the retention overflows the clock
    pub async fn run_cleanup(&self) -> DomainResult<usize> {
        if !self.config.enabled {
            return Ok(0);
        }

        let cutoff = chrono::Duration::try_seconds(self.config.retention_seconds)
            .and_then(|retention| self.clock.now().checked_sub_signed(retention))
            .ok_or_else(|| {
                DomainError::internal(format!(
                    "OTP retention of {}s cannot be applied",
                    self.config.retention_seconds
                ))
            })?;
        let removed = self
            .store
            .purge_expired(cutoff)
            .await
            .map_err(DomainError::internal)?;

        if removed > 0 {
            info!(removed, cutoff = %cutoff, "Purged expired OTP records");
        } else {
            debug!("No expired OTP records to purge");
        }

        Ok(removed)
    }

    /// Start the cleanup loop on the current tokio runtime
    ///
    /// Returns `None` when cleanup is disabled.
    pub fn spawn(self: Arc<Self>) -> Option<JoinHandle<()>> {
        if !self.config.enabled || self.config.interval_seconds == 0 {
            info!("OTP cleanup disabled");
            return None;
        }

        info!(
            interval_seconds = self.config.interval_seconds,
            retention_seconds = self.config.retention_seconds,
            "Starting OTP cleanup task"
        );

        Some(tokio::spawn(async move {
            let mut ticker =
                tokio::time::interval(StdDuration::from_secs(self.config.interval_seconds));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if let Err(e) = self.run_cleanup().await {
                    error!("OTP cleanup failed: {}", e);
                }
            }
        }))
    }
}
