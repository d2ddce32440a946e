//! Unit tests for the OTP service

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Arc;

use crate::domain::entities::otp_record::{CODE_LENGTH, CODE_MAX, CODE_MIN};
use crate::domain::entities::OtpRecord;
use crate::errors::{Collaborator, DomainError, OtpError};
use crate::services::clock::ManualClock;
use crate::services::otp::{OtpService, OtpServiceConfig};

use super::mocks::{MockMailSender, MockOtpStore};

fn epoch() -> DateTime<Utc> {
    Utc.timestamp_millis_opt(0).unwrap()
}

fn service_at(
    start: DateTime<Utc>,
    config: OtpServiceConfig,
) -> (
    OtpService<MockMailSender, MockOtpStore, ManualClock>,
    Arc<MockMailSender>,
    Arc<MockOtpStore>,
    Arc<ManualClock>,
) {
    let mail = Arc::new(MockMailSender::new(false));
    let store = Arc::new(MockOtpStore::new(false));
    let clock = Arc::new(ManualClock::new(start));
    let service = OtpService::with_clock(mail.clone(), store.clone(), clock.clone(), config);
    (service, mail, store, clock)
}

#[tokio::test]
async fn test_issue_stores_and_delivers_code() {
    let (service, mail, store, _) = service_at(epoch(), OtpServiceConfig::default());

    let result = service.issue("a@x.com").await.unwrap();
    let code = &result.record.code;

    assert_eq!(code.len(), CODE_LENGTH);
    let num: u32 = code.parse().unwrap();
    assert!((CODE_MIN..=CODE_MAX).contains(&num));
    assert_eq!(result.record.expires_at.timestamp_millis(), 300_000);
    assert_eq!(result.delivery.response, "250 OK");

    assert_eq!(mail.sent_count(), 1);
    let sent = mail.last_sent().unwrap();
    assert_eq!(sent.to, "a@x.com");
    assert_eq!(sent.subject, "Your OTP Code");
    assert_eq!(
        sent.body,
        format!("Your OTP is {}. It will expire in 5 minutes.", code)
    );

    assert_eq!(store.record("a@x.com"), Some(result.record.clone()));
}

#[tokio::test]
async fn test_issue_rejects_empty_identifier() {
    let (service, mail, _, _) = service_at(epoch(), OtpServiceConfig::default());

    let err = service.issue("").await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
    assert_eq!(mail.sent_count(), 0);
}

#[tokio::test]
async fn test_issue_keeps_record_when_delivery_fails() {
    let mail = Arc::new(MockMailSender::new(true));
    let store = Arc::new(MockOtpStore::new(false));
    let clock = Arc::new(ManualClock::new(epoch()));
    let service = OtpService::with_clock(
        mail.clone(),
        store.clone(),
        clock,
        OtpServiceConfig::default(),
    );

    let err = service.issue("a@x.com").await.unwrap_err();
    match err {
        DomainError::CollaboratorFailure {
            collaborator,
            message,
        } => {
            assert_eq!(collaborator, Collaborator::MailSender);
            assert!(message.contains("Authentication failed"));
        }
        other => panic!("Expected collaborator failure, got {:?}", other),
    }
    assert_eq!(mail.sent_count(), 1);

    // No rollback: the undelivered code is still verifiable
    let code = mail.get_sent_code("a@x.com").unwrap();
    assert_eq!(store.record("a@x.com").unwrap().code, code);
    assert!(service.verify("a@x.com", &code).await.is_ok());
}

#[tokio::test]
async fn test_issue_surfaces_store_failure() {
    let mail = Arc::new(MockMailSender::new(false));
    let store = Arc::new(MockOtpStore::new(true));
    let service = OtpService::new(mail.clone(), store, OtpServiceConfig::default());

    let err = service.issue("a@x.com").await.unwrap_err();
    assert!(matches!(err, DomainError::Internal { .. }));
    assert_eq!(mail.sent_count(), 0);
}

#[tokio::test]
async fn test_reissue_invalidates_previous_code() {
    let (service, _, store, _) = service_at(epoch(), OtpServiceConfig::default());

    // Seed a known first code so the second issuance cannot collide with it
    store
        .records
        .lock()
        .unwrap()
        .insert(
            "a@x.com".to_string(),
            OtpRecord::with_code("a@x.com", "000000", epoch() + Duration::seconds(300)),
        );

    let second = service.issue("a@x.com").await.unwrap().record.code;

    assert_eq!(store.records.lock().unwrap().len(), 1);
    assert_eq!(
        service.verify("a@x.com", "000000").await.unwrap_err(),
        DomainError::Otp(OtpError::Mismatch)
    );
    assert!(service.verify("a@x.com", &second).await.is_ok());
}

#[tokio::test]
async fn test_verify_not_found() {
    let (service, _, _, _) = service_at(epoch(), OtpServiceConfig::default());

    let err = service.verify("nobody@x.com", "123456").await.unwrap_err();
    assert_eq!(err, DomainError::Otp(OtpError::NotFound));
}

#[tokio::test]
async fn test_verify_mismatch_is_exact() {
    let (service, _, store, _) = service_at(epoch(), OtpServiceConfig::default());
    store.records.lock().unwrap().insert(
        "a@x.com".to_string(),
        OtpRecord::with_code("a@x.com", "482913", epoch() + Duration::seconds(300)),
    );

    for candidate in ["482914", " 482913", "482913 ", "", "48291"] {
        assert_eq!(
            service.verify("a@x.com", candidate).await.unwrap_err(),
            DomainError::Otp(OtpError::Mismatch),
            "candidate {:?}",
            candidate
        );
    }
}

#[tokio::test]
async fn test_verify_lifecycle_is_reusable_until_expiry() {
    let (service, _, store, clock) = service_at(epoch(), OtpServiceConfig::default());
    store.records.lock().unwrap().insert(
        "a@x.com".to_string(),
        OtpRecord::with_code("a@x.com", "482913", epoch() + Duration::seconds(300)),
    );

    clock.set(epoch() + Duration::milliseconds(100_000));
    let first = service.verify("a@x.com", "482913").await.unwrap();
    assert!(!first.consumed);
    assert_eq!(first.expires_at.timestamp_millis(), 300_000);

    // Not single-use: the same code verifies again
    assert!(service.verify("a@x.com", "482913").await.is_ok());
    assert!(store.record("a@x.com").is_some());

    clock.set(epoch() + Duration::milliseconds(300_000));
    assert!(service.verify("a@x.com", "482913").await.is_ok());

    clock.set(epoch() + Duration::milliseconds(300_001));
    assert_eq!(
        service.verify("a@x.com", "482913").await.unwrap_err(),
        DomainError::Otp(OtpError::Expired)
    );
}

#[tokio::test]
async fn test_non_text_candidate_is_a_mismatch_after_lookup() {
    let (service, _, store, clock) = service_at(epoch(), OtpServiceConfig::default());

    assert_eq!(
        service.verify_candidate("a@x.com", None).await.unwrap_err(),
        DomainError::Otp(OtpError::NotFound)
    );

    store.records.lock().unwrap().insert(
        "a@x.com".to_string(),
        OtpRecord::with_code("a@x.com", "482913", epoch() + Duration::seconds(300)),
    );
    assert_eq!(
        service.verify_candidate("a@x.com", None).await.unwrap_err(),
        DomainError::Otp(OtpError::Mismatch)
    );

    clock.advance(Duration::seconds(301));
    assert_eq!(
        service.verify_candidate("a@x.com", None).await.unwrap_err(),
        DomainError::Otp(OtpError::Expired)
    );
}

#[tokio::test]
async fn test_expired_takes_precedence_over_mismatch() {
    let (service, _, store, clock) = service_at(epoch(), OtpServiceConfig::default());
    store.records.lock().unwrap().insert(
        "a@x.com".to_string(),
        OtpRecord::with_code("a@x.com", "482913", epoch() + Duration::seconds(300)),
    );

    clock.advance(Duration::seconds(301));
    assert_eq!(
        service.verify("a@x.com", "000000").await.unwrap_err(),
        DomainError::Otp(OtpError::Expired)
    );
}

#[tokio::test]
async fn test_single_use_mode_consumes_record() {
    let config = OtpServiceConfig {
        single_use: true,
        ..Default::default()
    };
    let (service, mail, store, _) = service_at(epoch(), config);

    service.issue("a@x.com").await.unwrap();
    let code = mail.get_sent_code("a@x.com").unwrap();

    let result = service.verify("a@x.com", &code).await.unwrap();
    assert!(result.consumed);
    assert!(store.record("a@x.com").is_none());

    assert_eq!(
        service.verify("a@x.com", &code).await.unwrap_err(),
        DomainError::Otp(OtpError::NotFound)
    );
}

#[tokio::test]
async fn test_custom_ttl() {
    let config = OtpServiceConfig {
        ttl_seconds: 60,
        ..Default::default()
    };
    let (service, mail, _, clock) = service_at(epoch(), config);

    let record = service.issue("a@x.com").await.unwrap().record;
    assert_eq!(record.expires_at, epoch() + Duration::seconds(60));
    assert!(mail.last_sent().unwrap().body.ends_with("1 minute."));

    clock.advance(Duration::seconds(61));
    assert_eq!(
        service.verify("a@x.com", &record.code).await.unwrap_err(),
        DomainError::Otp(OtpError::Expired)
    );
}

#[tokio::test]
async fn test_oversized_ttl_fails_without_side_effects() {
    for ttl_seconds in [i64::MAX, 10_000_000_000_000_000] {
        let config = OtpServiceConfig {
            ttl_seconds,
            ..Default::default()
        };
        let (service, mail, store, _) = service_at(epoch(), config);

        let err = service.issue("a@x.com").await.unwrap_err();
        assert!(matches!(err, DomainError::Internal { .. }));
        assert!(store.record("a@x.com").is_none());
        assert_eq!(mail.sent_count(), 0);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_issuance_to_distinct_identifiers() {
    let mail = Arc::new(MockMailSender::new(false));
    let store = Arc::new(MockOtpStore::new(false));
    let service = Arc::new(OtpService::new(
        mail.clone(),
        store.clone(),
        OtpServiceConfig::default(),
    ));

    let handles: Vec<_> = (0..50)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                let identifier = format!("user{}@x.com", i);
                let record = service.issue(&identifier).await.unwrap().record;
                (identifier, record)
            })
        })
        .collect();

    let mut issued = Vec::new();
    for handle in handles {
        issued.push(handle.await.unwrap());
    }

    assert_eq!(store.records.lock().unwrap().len(), 50);
    for (identifier, record) in issued {
        assert_eq!(store.record(&identifier), Some(record));
    }
    assert_eq!(mail.sent_count(), 50);
}
