use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::handlers::ApiError;
use crate::middleware::{ActixSessionStore, AuthenticatedUser};

/// Handler for GET /mfa/validate
///
/// Starts a login-time challenge. Any code left from an earlier challenge is
/// dropped so only a code sent from here on is accepted.
pub async fn validation_view(
    _user: AuthenticatedUser,
    session: Session,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let store = ActixSessionStore::new(&session);
    let view = state.otp.validation_view(&store)?;
    Ok(HttpResponse::Ok().json(view))
}
