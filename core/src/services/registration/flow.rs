//! Registration state machine

use std::sync::Arc;

use crate::domain::entities::{
    Enrollment, FlashMessage, RegistrationAction, RegistrationForm, RegistrationView,
    PENDING_PHONE_KEY,
};
use crate::domain::value_objects::{MfaMethod, Principal};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{EnrollmentRepository, SessionStore};
use crate::services::sms_otp::{SmsDeliveryTrait, SmsOtpService};

const MSG_ENTER_PHONE: &str = "Please enter a phone number";
const MSG_ENTER_CODE: &str = "Please enter the verification code";
const MSG_PHONE_NOT_FOUND: &str = "Phone number not found. Please start over.";
const MSG_ENROLL_FAILED: &str = "Unable to register SMS authentication. Please try again.";
const MSG_REGISTERED: &str = "SMS authentication registered successfully";

pub struct RegistrationFlow<D, E>
where
    D: SmsDeliveryTrait + ?Sized,
    E: EnrollmentRepository + ?Sized,
{
    otp: Arc<SmsOtpService<D>>,
    enrollments: Arc<E>,
}

impl<D, E> RegistrationFlow<D, E>
where
    D: SmsDeliveryTrait + ?Sized,
    E: EnrollmentRepository + ?Sized,
{
    pub fn new(otp: Arc<SmsOtpService<D>>, enrollments: Arc<E>) -> Self {
        Self { otp, enrollments }
    }

    /// Advance the flow with one submitted form.
    ///
    /// User-facing failures come back as a `SETUP` view carrying an error
    /// message. Only session and internal failures are returned as `Err`.
    pub async fn handle<S: SessionStore + ?Sized>(
        &self,
        principal: &Principal,
        session: &S,
        form: &RegistrationForm,
    ) -> DomainResult<RegistrationView> {
        match form.action() {
            RegistrationAction::Setup => self.restart(session, None),
            RegistrationAction::SendCode { phone } => {
                self.send_code(principal, session, phone.as_deref()).await
            }
            RegistrationAction::VerifyCode { code } => {
                self.verify_code(principal, session, code.as_deref()).await
            }
            RegistrationAction::Unrecognized(action) => {
                tracing::warn!(action = ?action, "Unhandled registration action");
                self.restart(session, None)
            }
        }
    }

    async fn send_code<S: SessionStore + ?Sized>(
        &self,
        principal: &Principal,
        session: &S,
        phone: Option<&str>,
    ) -> DomainResult<RegistrationView> {
        // An empty field must not fall back to a previously stored phone.
        let Some(phone) = phone else {
            return self.restart(session, Some(FlashMessage::error(MSG_ENTER_PHONE)));
        };

        match self.otp.request_delivery(principal, session, Some(phone)).await {
            Ok(outcome) => Ok(RegistrationView::code_sent(outcome.message)),
            Err(DomainError::Mfa(err)) => {
                self.restart(session, Some(FlashMessage::error(err.to_string())))
            }
            Err(err) => Err(err),
        }
    }

    async fn verify_code<S: SessionStore + ?Sized>(
        &self,
        principal: &Principal,
        session: &S,
        code: Option<&str>,
    ) -> DomainResult<RegistrationView> {
        let Some(code) = code else {
            return self.restart(session, Some(FlashMessage::error(MSG_ENTER_CODE)));
        };

        let stored_phone = session
            .get(PENDING_PHONE_KEY)
            .map_err(|message| DomainError::Session { message })?;
        let Some(phone) = stored_phone else {
            return self.restart(session, Some(FlashMessage::error(MSG_PHONE_NOT_FOUND)));
        };

        match self.otp.verify(session, Some(code)) {
            Ok(()) => {}
            Err(DomainError::Mfa(err)) => {
                tracing::warn!(user = %principal.username, error = %err, "SMS code validation failed");
                return self.restart(session, Some(FlashMessage::error(err.to_string())));
            }
            Err(err) => return Err(err),
        }

        let enrollment = Enrollment::new(principal.username.clone(), MfaMethod::Sms, phone);
        if let Err(err) = self.enrollments.enroll(enrollment).await {
            tracing::error!(user = %principal.username, error = %err, "Failed to record SMS enrollment");
            return self.restart(session, Some(FlashMessage::error(MSG_ENROLL_FAILED)));
        }

        self.otp.clear_pending(session)?;
        tracing::info!(
            user = %principal.username,
            event = "mfa_registered",
            method = %MfaMethod::Sms,
            "SMS authentication registered"
        );
        Ok(RegistrationView::registered().with_message(FlashMessage::success(MSG_REGISTERED)))
    }

    /// Re-enter `SETUP`: clear both pending slots and render the setup view.
    fn restart<S: SessionStore + ?Sized>(
        &self,
        session: &S,
        flash: Option<FlashMessage>,
    ) -> DomainResult<RegistrationView> {
        self.otp.clear_pending(session)?;
        let view = RegistrationView::setup();
        Ok(match flash {
            Some(flash) => view.with_message(flash),
            None => view,
        })
    }
}
