//! In-memory OTP store backed by a sharded concurrent map
//!
//! `DashMap` locks one shard per access, so operations on the same
//! identifier are serialized while operations on other identifiers proceed
//! in parallel. No lock guard is held across an `.await`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::debug;

use sb_core::domain::entities::OtpRecord;
use sb_core::services::otp::OtpStore;
use sb_shared::utils::masking::mask_email;

/// Concurrent in-memory [`OtpStore`]
#[derive(Debug, Default)]
pub struct InMemoryOtpStore {
    records: DashMap<String, OtpRecord>,
}

impl InMemoryOtpStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OtpStore for InMemoryOtpStore {
    async fn put(&self, record: OtpRecord) -> Result<Option<OtpRecord>, String> {
        debug!(identifier = %mask_email(&record.issued_to), "Storing OTP record");
        Ok(self.records.insert(record.issued_to.clone(), record))
    }

    async fn get(&self, identifier: &str) -> Result<Option<OtpRecord>, String> {
        Ok(self.records.get(identifier).map(|entry| entry.value().clone()))
    }

    async fn remove(&self, identifier: &str) -> Result<Option<OtpRecord>, String> {
        Ok(self.records.remove(identifier).map(|(_, record)| record))
    }

    async fn consume(&self, identifier: &str, code: &str) -> Result<bool, String> {
        Ok(self
            .records
            .remove_if(identifier, |_, record| record.code == code)
            .is_some())
    }

    async fn purge_expired(&self, cutoff: DateTime<Utc>) -> Result<usize, String> {
        let mut removed = 0;
        self.records.retain(|_, record| {
            let keep = record.expires_at >= cutoff;
            if !keep {
                removed += 1;
            }
            keep
        });
        Ok(removed)
    }

    async fn len(&self) -> Result<usize, String> {
        Ok(self.records.len())
    }
}
