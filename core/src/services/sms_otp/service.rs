//! SMS OTP service implementation

use constant_time_eq::constant_time_eq;
use std::sync::Arc;

use sm_shared::phone::{is_valid_international_phone, mask_phone_number};

use crate::domain::entities::{
    PendingVerification, ValidationView, PENDING_OTP_KEY, PENDING_PHONE_KEY,
};
use crate::domain::value_objects::{DeliveryOutcome, Principal};
use crate::errors::{DomainError, DomainResult, MfaError};
use crate::repositories::SessionStore;
use crate::services::otp::CodeGenerator;

use super::config::SmsOtpConfig;
use super::traits::SmsDeliveryTrait;

/// OTP lifecycle manager.
///
/// Holds no per-user state itself; the pending code and phone number live in
/// the [`SessionStore`] passed to each call.
pub struct SmsOtpService<D: SmsDeliveryTrait + ?Sized> {
    delivery: Arc<D>,
    generator: Arc<dyn CodeGenerator>,
    config: SmsOtpConfig,
}

impl<D: SmsDeliveryTrait + ?Sized> SmsOtpService<D> {
    pub fn new(delivery: Arc<D>, generator: Arc<dyn CodeGenerator>, config: SmsOtpConfig) -> Self {
        Self {
            delivery,
            generator,
            config,
        }
    }

    /// The delivery collaborator
    pub fn delivery(&self) -> &D {
        &self.delivery
    }

    /// Produce a fresh six-digit code for `principal`
    pub fn generate(&self, principal: &Principal) -> String {
        self.generator.generate(principal)
    }

    /// Generate a code, store it as pending and send it by SMS.
    ///
    /// Without an explicit `phone` the pending phone of the session is used.
    /// The code is stored before the provider is contacted and stays stored
    /// if delivery fails. The phone is stored only after a successful send.
    pub async fn request_delivery<S: SessionStore + ?Sized>(
        &self,
        principal: &Principal,
        session: &S,
        phone: Option<&str>,
    ) -> DomainResult<DeliveryOutcome> {
        let phone = match phone.filter(|p| !p.is_empty()) {
            Some(phone) => phone.to_string(),
            None => session_get(session, PENDING_PHONE_KEY)?
                .filter(|p| !p.is_empty())
                .ok_or(MfaError::MissingPhoneNumber)?,
        };
        let masked = mask_phone_number(&phone);

        if !is_valid_international_phone(&phone) {
            tracing::warn!(phone = %masked, event = "invalid_phone_format", "Rejected phone number");
            return Err(MfaError::InvalidPhoneFormat { phone }.into());
        }

        let code = self.generate(principal);
        session_insert(session, PENDING_OTP_KEY, &code)?;
        tracing::info!(
            user = %principal.username,
            phone = %masked,
            event = "otp_generated",
            "Generated new verification code"
        );

        let credentials = self.delivery.credentials();
        if let Err(err) = credentials.ensure_configured() {
            tracing::warn!(
                provider = self.delivery.provider_name(),
                event = "sms_provider_not_configured",
                "{}",
                err
            );
            return Err(err.into());
        }

        let body = self.config.message_body(&code);
        match self.delivery.send(&body, credentials.sender(), &phone).await {
            Ok(message_id) => {
                session_insert(session, PENDING_PHONE_KEY, &phone)?;
                tracing::info!(
                    phone = %masked,
                    message_id = %message_id,
                    provider = self.delivery.provider_name(),
                    event = "otp_sent",
                    "Verification code sent"
                );
                Ok(DeliveryOutcome::new(message_id, masked))
            }
            Err(provider_err) => {
                let err = MfaError::from(provider_err.clone());
                tracing::error!(
                    phone = %masked,
                    provider = self.delivery.provider_name(),
                    code = ?provider_err.code,
                    status = ?provider_err.status,
                    error = %provider_err,
                    event = "otp_send_failed",
                    "Failed to send verification code"
                );
                Err(err.into())
            }
        }
    }

    /// Check `submitted` against the pending code.
    ///
    /// A match consumes the code; a mismatch leaves it in place.
    pub fn verify<S: SessionStore + ?Sized>(
        &self,
        session: &S,
        submitted: Option<&str>,
    ) -> DomainResult<()> {
        let submitted = submitted
            .filter(|c| !c.is_empty())
            .ok_or(MfaError::MissingCode)?;

        let stored = session_get(session, PENDING_OTP_KEY)?
            .ok_or(MfaError::MissingPendingVerification)?;

        if !Self::constant_time_compare(submitted, &stored) {
            tracing::warn!(event = "otp_mismatch", "Verification code did not match");
            return Err(MfaError::CodeMismatch.into());
        }

        session_remove(session, PENDING_OTP_KEY)?;
        tracing::info!(event = "otp_verified", "Verification code accepted");
        Ok(())
    }

    /// Remember `phone` as the pending phone without sending anything
    pub fn store_phone<S: SessionStore + ?Sized>(
        &self,
        session: &S,
        phone: Option<&str>,
    ) -> DomainResult<()> {
        let phone = phone
            .filter(|p| !p.is_empty())
            .ok_or(MfaError::MissingPhoneNumber)?;
        session_insert(session, PENDING_PHONE_KEY, phone)
    }

    /// Start a login-time challenge: drop any pending code and return the
    /// labels for the challenge form.
    pub fn validation_view<S: SessionStore + ?Sized>(
        &self,
        session: &S,
    ) -> DomainResult<ValidationView> {
        session_remove(session, PENDING_OTP_KEY)?;
        Ok(ValidationView::default())
    }

    /// Current contents of both pending slots
    pub fn pending<S: SessionStore + ?Sized>(&self, session: &S) -> DomainResult<PendingVerification> {
        Ok(PendingVerification {
            phone_number: session_get(session, PENDING_PHONE_KEY)?,
            otp: session_get(session, PENDING_OTP_KEY)?,
        })
    }

    /// Clear both pending slots
    pub fn clear_pending<S: SessionStore + ?Sized>(&self, session: &S) -> DomainResult<()> {
        session_remove(session, PENDING_OTP_KEY)?;
        session_remove(session, PENDING_PHONE_KEY)?;
        Ok(())
    }

    fn constant_time_compare(code_a: &str, code_b: &str) -> bool {
        if code_a.len() != code_b.len() {
            return false;
        }
        constant_time_eq(code_a.as_bytes(), code_b.as_bytes())
    }
}

fn session_get<S: SessionStore + ?Sized>(session: &S, key: &str) -> DomainResult<Option<String>> {
    session
        .get(key)
        .map_err(|message| DomainError::Session { message })
}

fn session_insert<S: SessionStore + ?Sized>(session: &S, key: &str, value: &str) -> DomainResult<()> {
    session
        .insert(key, value)
        .map_err(|message| DomainError::Session { message })
}

fn session_remove<S: SessionStore + ?Sized>(session: &S, key: &str) -> DomainResult<()> {
    session
        .remove(key)
        .map(|_| ())
        .map_err(|message| DomainError::Session { message })
}
