use actix_session::Session;
use actix_web::{web, HttpResponse};

use sm_core::domain::entities::RegistrationForm;

use crate::app::AppState;
use crate::handlers::ApiError;
use crate::middleware::{ActixSessionStore, AuthenticatedUser};

/// Handler for GET /mfa/register
pub async fn registration_page(
    user: AuthenticatedUser,
    session: Session,
    state: web::Data<AppState>,
    query: web::Query<RegistrationForm>,
) -> Result<HttpResponse, ApiError> {
    advance(user, session, state, query.into_inner()).await
}

/// Handler for POST /mfa/register
pub async fn submit_registration(
    user: AuthenticatedUser,
    session: Session,
    state: web::Data<AppState>,
    form: web::Form<RegistrationForm>,
) -> Result<HttpResponse, ApiError> {
    advance(user, session, state, form.into_inner()).await
}

async fn advance(
    user: AuthenticatedUser,
    session: Session,
    state: web::Data<AppState>,
    form: RegistrationForm,
) -> Result<HttpResponse, ApiError> {
    let store = ActixSessionStore::new(&session);
    let view = state
        .registration
        .handle(&user.principal(), &store, &form)
        .await?;

    tracing::debug!(user = %user.username, state = ?view.state, "Registration step rendered");
    Ok(HttpResponse::Ok().json(view))
}
