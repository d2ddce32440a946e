//! Integration tests for the OTP server endpoints

use std::sync::Arc;

use actix_web::http::{header::ContentType, StatusCode};
use actix_web::{test, web};
use chrono::{Duration, TimeZone, Utc};
use serde_json::{json, Value};

use sb_api::create_otp_app;
use sb_api::routes::otp::OtpAppState;
use sb_core::services::{
    ManualClock, OtpService, OtpServiceConfig, OtpStore, PasswordResetService,
};
use sb_infra::cache::InMemoryOtpStore;
use sb_infra::mail::MockMailSender;

const PAYLOAD_LIMIT: usize = 256 * 1024;

type TestState = OtpAppState<MockMailSender, InMemoryOtpStore, ManualClock>;

struct Fixture {
    state: web::Data<TestState>,
    store: Arc<InMemoryOtpStore>,
    clock: Arc<ManualClock>,
    mail: Arc<MockMailSender>,
}

fn fixture_with(mail: MockMailSender) -> Fixture {
    let store = Arc::new(InMemoryOtpStore::new());
    let clock = Arc::new(ManualClock::new(Utc.timestamp_millis_opt(0).unwrap()));
    let mail = Arc::new(mail);

    let otp_service = Arc::new(OtpService::with_clock(
        mail.clone(),
        store.clone(),
        clock.clone(),
        OtpServiceConfig::default(),
    ));
    let password_reset_service = Arc::new(PasswordResetService::with_clock(clock.clone()));

    Fixture {
        state: web::Data::new(OtpAppState::new(otp_service, password_reset_service)),
        store,
        clock,
        mail,
    }
}

fn fixture() -> Fixture {
    fixture_with(MockMailSender::with_options(false, false))
}

fn post_json(uri: &str, body: Value) -> test::TestRequest {
    test::TestRequest::post().uri(uri).set_json(body)
}

#[actix_web::test]
async fn test_send_otp_stores_code_and_mails_it() {
    let fixture = fixture();
    let app = test::init_service(create_otp_app(fixture.state.clone(), PAYLOAD_LIMIT)).await;

    let resp = test::call_service(&app, post_json("/send-otp", json!({ "email": "a@x.com" })).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": true, "message": "OTP sent successfully!" }));

    let record = fixture.store.get("a@x.com").await.unwrap().unwrap();
    assert_eq!(record.code.len(), 6);
    assert!(record.code.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(fixture.mail.get_message_count(), 1);
}

#[actix_web::test]
async fn test_send_otp_requires_email() {
    let fixture = fixture();
    let app = test::init_service(create_otp_app(fixture.state.clone(), PAYLOAD_LIMIT)).await;

    let resp = test::call_service(&app, post_json("/send-otp", json!({})).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": false, "error": "email is required" }));
    assert_eq!(fixture.store.len().await.unwrap(), 0);
}

#[actix_web::test]
async fn test_send_otp_mail_failure_keeps_record() {
    let fixture = fixture_with(MockMailSender::with_options(false, true));
    let app = test::init_service(create_otp_app(fixture.state.clone(), PAYLOAD_LIMIT)).await;

    let resp = test::call_service(&app, post_json("/send-otp", json!({ "email": "a@x.com" })).to_request()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "success": false, "error": "Simulated mail delivery failure" })
    );

    // Not rolled back: the code can still be verified
    let record = fixture.store.get("a@x.com").await.unwrap().unwrap();
    let resp = test::call_service(
        &app,
        post_json("/verify-otp", json!({ "email": "a@x.com", "otp": record.code })).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_verify_otp_outcomes() {
    let fixture = fixture();
    let app = test::init_service(create_otp_app(fixture.state.clone(), PAYLOAD_LIMIT)).await;

    let resp = test::call_service(
        &app,
        post_json("/verify-otp", json!({ "email": "nobody@x.com", "otp": "123456" })).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": false, "message": "No OTP found" }));

    test::call_service(&app, post_json("/send-otp", json!({ "email": "a@x.com" })).to_request()).await;
    let code = fixture.store.get("a@x.com").await.unwrap().unwrap().code;
    let wrong = if code == "100000" { "100001" } else { "100000" };

    let resp = test::call_service(
        &app,
        post_json("/verify-otp", json!({ "email": "a@x.com", "otp": wrong })).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": false, "message": "Invalid OTP" }));

    // Not trimmed
    let resp = test::call_service(
        &app,
        post_json("/verify-otp", json!({ "email": "a@x.com", "otp": format!(" {}", code) })).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    for _ in 0..2 {
        let resp = test::call_service(
            &app,
            post_json("/verify-otp", json!({ "email": "a@x.com", "otp": code })).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "success": true, "message": "OTP verified" }));
    }
}

#[actix_web::test]
async fn test_verify_otp_expired() {
    let fixture = fixture();
    let app = test::init_service(create_otp_app(fixture.state.clone(), PAYLOAD_LIMIT)).await;

    test::call_service(&app, post_json("/send-otp", json!({ "email": "a@x.com" })).to_request()).await;
    let code = fixture.store.get("a@x.com").await.unwrap().unwrap().code;

    // Still valid at exactly expires_at
    fixture.clock.advance(Duration::seconds(300));
    let resp = test::call_service(
        &app,
        post_json("/verify-otp", json!({ "email": "a@x.com", "otp": code })).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    fixture.clock.advance(Duration::milliseconds(1));
    let resp = test::call_service(
        &app,
        post_json("/verify-otp", json!({ "email": "a@x.com", "otp": code })).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": false, "message": "OTP expired" }));
}

#[actix_web::test]
async fn test_reset_password_always_succeeds() {
    let fixture = fixture();
    let app = test::init_service(create_otp_app(fixture.state.clone(), PAYLOAD_LIMIT)).await;

    let resp = test::call_service(
        &app,
        post_json("/reset-password", json!({ "email": "a@x.com", "password": "n3w-passw0rd" })).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "success": true, "message": "Password reset successfully!" })
    );
}

#[actix_web::test]
async fn test_form_encoded_bodies_are_accepted() {
    let fixture = fixture();
    let app = test::init_service(create_otp_app(fixture.state.clone(), PAYLOAD_LIMIT)).await;

    let req = test::TestRequest::post()
        .uri("/send-otp")
        .set_form([("email", "a@x.com")])
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "success": true, "message": "OTP sent successfully!" }));

    let code = fixture.store.get("a@x.com").await.unwrap().unwrap().code;
    let req = test::TestRequest::post()
        .uri("/verify-otp")
        .set_form([("email", "a@x.com"), ("otp", code.as_str())])
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "success": true, "message": "OTP verified" }));

    let req = test::TestRequest::post()
        .uri("/reset-password")
        .set_form([("email", "a@x.com"), ("password", "hunter22")])
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "success": true, "message": "Password reset successfully!" }));
}

#[actix_web::test]
async fn test_numeric_otp_is_invalid() {
    let fixture = fixture();
    let app = test::init_service(create_otp_app(fixture.state.clone(), PAYLOAD_LIMIT)).await;

    test::call_service(&app, post_json("/send-otp", json!({ "email": "a@x.com" })).to_request()).await;
    let code: u32 = fixture
        .store
        .get("a@x.com")
        .await
        .unwrap()
        .unwrap()
        .code
        .parse()
        .unwrap();

    // Even the right digits are rejected when sent as a number
    let resp = test::call_service(
        &app,
        post_json("/verify-otp", json!({ "email": "a@x.com", "otp": code })).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": false, "message": "Invalid OTP" }));

    let resp = test::call_service(
        &app,
        post_json("/verify-otp", json!({ "email": "b@x.com", "otp": 123456 })).to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": false, "message": "No OTP found" }));
}

#[actix_web::test]
async fn test_malformed_json_is_rejected() {
    let fixture = fixture();
    let app = test::init_service(create_otp_app(fixture.state.clone(), PAYLOAD_LIMIT)).await;

    let req = test::TestRequest::post()
        .uri("/send-otp")
        .insert_header(ContentType::json())
        .set_payload("{\"email\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn test_liveness_and_health() {
    let fixture = fixture();
    let app = test::init_service(create_otp_app(fixture.state.clone(), PAYLOAD_LIMIT)).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(&body[..], b"OTP backend running.");

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "otp-service");

    let req = test::TestRequest::get().uri("/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
