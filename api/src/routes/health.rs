use actix_web::{web, HttpResponse};
use chrono::Utc;

use sm_shared::types::{HealthResponse, HealthStatus};

use crate::app::AppState;

/// Health check endpoint handler
///
/// Reports `degraded` when the SMS provider rejects the configured account.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let delivery = state.otp.delivery();
    let status = if delivery.is_available().await {
        HealthStatus::Healthy
    } else {
        tracing::warn!(provider = delivery.provider_name(), "SMS provider unavailable");
        HealthStatus::Degraded
    };

    HttpResponse::Ok().json(HealthResponse {
        status,
        mfa_enabled: state.mfa.enabled,
        sms_provider: delivery.provider_name().to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
