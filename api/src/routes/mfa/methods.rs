use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::MethodsResponse;
use crate::middleware::AuthenticatedUser;

/// Handler for GET /mfa/methods
pub async fn list_methods(_user: AuthenticatedUser, state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(MethodsResponse {
        enabled: state.mfa.enabled,
        methods: state.registry.descriptors(&state.mfa),
    })
}
