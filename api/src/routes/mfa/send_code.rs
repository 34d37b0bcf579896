use actix_session::Session;
use actix_web::{web, HttpResponse};
use validator::Validate;

use sm_shared::phone::mask_phone_number;

use crate::app::AppState;
use crate::dto::{SendSmsCodeRequest, VerificationViewResponse};
use crate::handlers::ApiError;
use crate::middleware::{ActixSessionStore, AuthenticatedUser};

/// Handler for POST /mfa/send_sms_code
///
/// Sends a fresh code to `send_to` and answers with the verification step.
///
/// # Request Body (form)
///
/// `send_to=%2B14155551234&next=internal`
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "label": "SMS Authentication",
///     "auth_method": "sms",
///     "description": "Enter the verification code sent to your phone",
///     "otp_placeholder": "Enter 6-digit code",
///     "show_verification": true,
///     "masked_phone": "********1234",
///     "message": "A verification code was sent to ********1234. Check your phone and enter the code.",
///     "next_url": "internal"
/// }
/// ```
///
/// ## Errors
/// - 400 when the phone number is missing or malformed
/// - 503 when the SMS provider is not configured or fails
pub async fn send_sms_code(
    user: AuthenticatedUser,
    session: Session,
    state: web::Data<AppState>,
    form: web::Form<SendSmsCodeRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = form.into_inner();
    request.validate()?;

    let phone = request
        .send_to
        .as_deref()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| {
            tracing::warn!(user = %user.username, "No phone number provided in request");
            ApiError::phone_not_provided()
        })?;

    tracing::info!(
        user = %user.username,
        phone = %mask_phone_number(phone),
        "Attempting to send SMS code"
    );

    let store = ActixSessionStore::new(&session);
    let outcome = state
        .otp
        .request_delivery(&user.principal(), &store, Some(phone))
        .await?;

    Ok(HttpResponse::Ok().json(VerificationViewResponse::new(outcome, request.next)))
}
