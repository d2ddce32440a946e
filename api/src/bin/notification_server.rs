use std::sync::Arc;

use actix_web::{middleware::Logger, web, HttpServer};
use anyhow::Context;
use log::info;

use sb_api::config::NotificationServerConfig;
use sb_api::create_notification_app;
use sb_api::routes::notification::NotificationAppState;
use sb_core::services::NotificationService;
use sb_infra::push::create_push_provider;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = NotificationServerConfig::from_env();

    // Initialize logger
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.logging.level.as_str()),
    );

    info!("Starting notification relay ({})", config.environment);

    let provider = create_push_provider(&config.push);
    info!("Push provider: {}", provider.provider_name());

    let notification_service = Arc::new(NotificationService::new(provider));
    let app_state = web::Data::new(NotificationAppState::new(notification_service));

    let bind_address = config.server.bind_address();
    let max_payload_size = config.server.max_payload_size;

    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || {
        create_notification_app(app_state.clone(), max_payload_size).wrap(Logger::default())
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
