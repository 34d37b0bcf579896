use actix_session::Session;
use actix_web::{web, HttpResponse};
use validator::Validate;

use sm_shared::MessageResponse;

use crate::app::AppState;
use crate::dto::StorePhoneRequest;
use crate::handlers::ApiError;
use crate::middleware::{ActixSessionStore, AuthenticatedUser};

/// Handler for POST /mfa/store_phone
///
/// Remembers the phone number for a later send without validating it.
pub async fn store_phone(
    _user: AuthenticatedUser,
    session: Session,
    state: web::Data<AppState>,
    form: web::Form<StorePhoneRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = form.into_inner();
    request.validate()?;

    let phone = request
        .phone
        .as_deref()
        .filter(|p| !p.is_empty())
        .ok_or_else(ApiError::phone_not_provided)?;

    let store = ActixSessionStore::new(&session);
    state.otp.store_phone(&store, Some(phone))?;

    Ok(HttpResponse::Ok().json(MessageResponse::ok("OK")))
}
