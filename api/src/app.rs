//! Application factories
//!
//! Each server gets a `configure_*` function that registers its routes and
//! a `create_*_app` factory that also installs state and the JSON extractor
//! settings. Binaries add logging and CORS on top; tests use the factories
//! as they are.

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpResponse};

use sb_core::services::{Clock, MailSender, OtpStore, PushProvider};

use crate::handlers::{notification_json_config, otp_json_config};
use crate::routes::health::{notification_health, notification_root, otp_health, otp_root};
use crate::routes::notification::{send_notification, NotificationAppState};
use crate::routes::otp::{reset_password, send_otp, verify_otp, OtpAppState};

/// Register the OTP server's routes
pub fn configure_otp_routes<M, S, C>(cfg: &mut web::ServiceConfig)
where
    M: MailSender + ?Sized + 'static,
    S: OtpStore + ?Sized + 'static,
    C: Clock + ?Sized + 'static,
{
    cfg.route("/", web::get().to(otp_root))
        .route("/health", web::get().to(otp_health))
        .route("/send-otp", web::post().to(send_otp::<M, S, C>))
        .route("/verify-otp", web::post().to(verify_otp::<M, S, C>))
        .route("/reset-password", web::post().to(reset_password::<M, S, C>));
}

/// Register the notification relay's routes
pub fn configure_notification_routes<P>(cfg: &mut web::ServiceConfig)
where
    P: PushProvider + ?Sized + 'static,
{
    cfg.route("/", web::get().to(notification_root))
        .route("/health", web::get().to(notification_health))
        .route("/send-notification", web::post().to(send_notification::<P>));
}

/// Create the OTP application with all dependencies
pub fn create_otp_app<M, S, C>(
    app_state: web::Data<OtpAppState<M, S, C>>,
    max_payload_size: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    M: MailSender + ?Sized + 'static,
    S: OtpStore + ?Sized + 'static,
    C: Clock + ?Sized + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(otp_json_config(max_payload_size))
        .app_data(web::FormConfig::default().limit(max_payload_size))
        .app_data(web::PayloadConfig::new(max_payload_size))
        .configure(configure_otp_routes::<M, S, C>)
        .default_service(web::route().to(not_found))
}

/// Create the notification relay application with all dependencies
pub fn create_notification_app<P>(
    app_state: web::Data<NotificationAppState<P>>,
    max_payload_size: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    P: PushProvider + ?Sized + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(notification_json_config(max_payload_size))
        .configure(configure_notification_routes::<P>)
        .default_service(web::route().to(not_found))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "The requested resource was not found"
    }))
}
