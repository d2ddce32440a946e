use std::sync::Arc;

use actix_web::{middleware::Logger, web, HttpServer};
use anyhow::Context;
use log::info;

use sb_api::config::OtpServerConfig;
use sb_api::create_otp_app;
use sb_api::middleware::create_cors;
use sb_api::routes::otp::OtpAppState;
use sb_core::services::{
    OtpCleanupConfig, OtpCleanupService, OtpService, OtpServiceConfig, PasswordResetService,
    SystemClock,
};
use sb_infra::cache::InMemoryOtpStore;
use sb_infra::mail::create_mail_sender;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = OtpServerConfig::from_env();

    // Initialize logger
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.logging.level.as_str()),
    );

    info!("Starting OTP server ({})", config.environment);

    let mail_sender = create_mail_sender(&config.mail);
    info!("Mail sender: {}", mail_sender.provider_name());

    let store = Arc::new(InMemoryOtpStore::new());
    let clock = Arc::new(SystemClock);

    let otp_service = Arc::new(OtpService::with_clock(
        mail_sender,
        store.clone(),
        clock.clone(),
        OtpServiceConfig::from(&config.otp),
    ));
    let password_reset_service = Arc::new(PasswordResetService::with_clock(clock.clone()));
    let app_state = web::Data::new(OtpAppState::new(otp_service, password_reset_service));

    // Expired records are removed in the background
    let cleanup = Arc::new(OtpCleanupService::new(
        store,
        clock,
        OtpCleanupConfig::from(&config.otp),
    ));
    let _cleanup_handle = cleanup.spawn();

    let bind_address = config.server.bind_address();
    let max_payload_size = config.server.max_payload_size;
    let environment = config.environment;
    let cors_config = config.cors.clone();

    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || {
        create_otp_app(app_state.clone(), max_payload_size)
            .wrap(create_cors(environment, &cors_config))
            .wrap(Logger::default())
    });

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
