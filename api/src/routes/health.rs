//! Liveness endpoints shared by both servers

use actix_web::HttpResponse;

pub const OTP_SERVICE_NAME: &str = "otp-service";
pub const NOTIFICATION_SERVICE_NAME: &str = "notification-relay";

/// `GET /` on the OTP server
pub async fn otp_root() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("OTP backend running.")
}

/// `GET /` on the notification relay
pub async fn notification_root() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("FCM backend running.")
}

pub async fn otp_health() -> HttpResponse {
    health_check(OTP_SERVICE_NAME)
}

pub async fn notification_health() -> HttpResponse {
    health_check(NOTIFICATION_SERVICE_NAME)
}

fn health_check(service: &str) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": service,
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
