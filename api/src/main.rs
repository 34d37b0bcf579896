use actix_web::{web, HttpServer};
use anyhow::{bail, Context};
use tracing::{info, warn};

use sm_api::middleware::session_key;
use sm_api::telemetry::init_tracing;
use sm_api::{create_app, AppState, HttpSettings};
use sm_core::services::{register_sms_method, MfaRegistry};
use sm_infra::create_sms_service;
use sm_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.logging)?;

    info!(environment = ?config.environment, "Starting SMS MFA API Server");

    if config.auth.jwt.is_using_default_secret() {
        if config.environment.is_production() {
            bail!("auth.jwt.secret must be set in production");
        }
        warn!("Using the default JWT secret, set SMS_MFA__AUTH__JWT__SECRET");
    }

    let mut registry = MfaRegistry::new();
    register_sms_method(&mut registry, &mut config.mfa);

    let delivery = create_sms_service(&config.sms).context("failed to create SMS service")?;
    info!(provider = delivery.provider_name(), "SMS provider ready");

    let state = web::Data::new(AppState::new(&config, delivery, registry));
    let settings = HttpSettings::new(&config, session_key(&config.auth.session));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone(), &settings));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;
    Ok(())
}
