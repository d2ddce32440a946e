//! HTTP layer for the OTP server and the push notification relay.
//!
//! Both servers are built from this library; the binaries under `src/bin`
//! only load configuration, pick collaborators and start `HttpServer`.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{
    configure_notification_routes, configure_otp_routes, create_notification_app, create_otp_app,
};
