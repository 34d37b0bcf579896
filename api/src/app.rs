//! Application state and factory
//!
//! This module wires the core services into shared state and provides the
//! factory for creating the Actix-web application.

use actix_web::{cookie::Key, web, App, HttpResponse};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use sm_core::repositories::{EnrollmentRepository, InMemoryEnrollmentRepository};
use sm_core::services::{
    generator_for, MfaRegistry, RegistrationFlow, SmsDeliveryTrait, SmsOtpConfig, SmsOtpService,
};
use sm_shared::{error_codes, AppConfig, CorsConfig, ErrorResponse, JwtConfig, MfaConfig, SessionConfig};

use crate::handlers::ApiError;
use crate::middleware::{create_cors, security_headers, session_middleware};
use crate::routes;

/// Shared services handed to every request
pub struct AppState {
    pub otp: Arc<SmsOtpService<dyn SmsDeliveryTrait>>,
    pub registration: RegistrationFlow<dyn SmsDeliveryTrait, dyn EnrollmentRepository>,
    pub enrollments: Arc<dyn EnrollmentRepository>,
    pub registry: MfaRegistry,
    pub mfa: MfaConfig,
    pub jwt: JwtConfig,
}

impl AppState {
    /// State with an in-memory enrollment registry
    pub fn new(config: &AppConfig, delivery: Arc<dyn SmsDeliveryTrait>, registry: MfaRegistry) -> Self {
        Self::with_enrollments(
            config,
            delivery,
            registry,
            Arc::new(InMemoryEnrollmentRepository::new()),
        )
    }

    pub fn with_enrollments(
        config: &AppConfig,
        delivery: Arc<dyn SmsDeliveryTrait>,
        registry: MfaRegistry,
        enrollments: Arc<dyn EnrollmentRepository>,
    ) -> Self {
        let otp = Arc::new(SmsOtpService::new(
            delivery,
            generator_for(config.mfa.otp_strategy),
            SmsOtpConfig::from(&config.sms),
        ));
        let registration = RegistrationFlow::new(otp.clone(), enrollments.clone());

        Self {
            otp,
            registration,
            enrollments,
            registry,
            mfa: config.mfa.clone(),
            jwt: config.auth.jwt.clone(),
        }
    }
}

/// HTTP-level settings shared by all workers
#[derive(Clone)]
pub struct HttpSettings {
    pub session: SessionConfig,
    pub cors: CorsConfig,
    /// Must be created once per process so every worker can read every cookie
    pub session_key: Key,
}

impl HttpSettings {
    pub fn new(config: &AppConfig, session_key: Key) -> Self {
        Self {
            session: config.auth.session.clone(),
            cors: config.cors.clone(),
            session_key,
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
    settings: &HttpSettings,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(app_state)
        .app_data(web::FormConfig::default().error_handler(|err, _req| {
            tracing::debug!(error = %err, "Rejected form payload");
            ApiError::bad_request(error_codes::BAD_REQUEST, err.to_string()).into()
        }))
        .app_data(web::QueryConfig::default().error_handler(|err, _req| {
            ApiError::bad_request(error_codes::BAD_REQUEST, err.to_string()).into()
        }))
        // Middleware order: the last one wraps first
        .wrap(session_middleware(&settings.session, settings.session_key.clone()))
        .wrap(create_cors(&settings.cors))
        .wrap(security_headers())
        .wrap(TracingLogger::default())
        .configure(routes::configure)
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "NOT_FOUND",
        "The requested resource was not found",
    ))
}
