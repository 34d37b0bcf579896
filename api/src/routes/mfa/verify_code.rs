use actix_session::Session;
use actix_web::{web, HttpResponse};
use validator::Validate;

use sm_shared::MessageResponse;

use crate::app::AppState;
use crate::dto::VerifySmsCodeRequest;
use crate::handlers::ApiError;
use crate::middleware::{ActixSessionStore, AuthenticatedUser};

pub const MSG_CODE_VERIFIED: &str = "Code verified successfully";

/// Handler for POST /mfa/verify_sms_code
///
/// A matching code is consumed; a mismatch leaves the pending code in place.
pub async fn verify_sms_code(
    user: AuthenticatedUser,
    session: Session,
    state: web::Data<AppState>,
    form: web::Form<VerifySmsCodeRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = form.into_inner();
    request.validate()?;

    let store = ActixSessionStore::new(&session);
    state.otp.verify(&store, request.code.as_deref())?;

    tracing::info!(user = %user.username, event = "sms_code_verified", "SMS code verified");
    Ok(HttpResponse::Ok().json(MessageResponse::ok(MSG_CODE_VERIFIED)))
}
