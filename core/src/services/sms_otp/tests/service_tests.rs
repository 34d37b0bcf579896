//! Unit tests for the SMS OTP service

use std::sync::Arc;

use crate::domain::entities::{PENDING_OTP_KEY, PENDING_PHONE_KEY};
use crate::domain::value_objects::{Principal, ProviderCredentials, ProviderError};
use crate::errors::{CredentialItem, DomainError, MfaError, TransportFailureKind};
use crate::repositories::{MemorySessionStore, SessionStore};
use crate::services::otp::DerivedCodeGenerator;
use crate::services::sms_otp::{SmsOtpConfig, SmsOtpService};

use super::mocks::{FixedCodeGenerator, MockSmsDelivery};

const PHONE: &str = "+14155551234";

fn service_with(delivery: Arc<MockSmsDelivery>, codes: &[&str]) -> SmsOtpService<MockSmsDelivery> {
    SmsOtpService::new(
        delivery,
        Arc::new(FixedCodeGenerator::new(codes)),
        SmsOtpConfig::default(),
    )
}

fn principal() -> Principal {
    Principal::new("alice")
}

fn mfa_error(err: DomainError) -> MfaError {
    match err {
        DomainError::Mfa(err) => err,
        other => panic!("expected MFA error, got {:?}", other),
    }
}

#[test]
fn test_generate_yields_six_digits() {
    let service = SmsOtpService::new(
        Arc::new(MockSmsDelivery::new()),
        Arc::new(DerivedCodeGenerator),
        SmsOtpConfig::default(),
    );
    for _ in 0..50 {
        let code = service.generate(&principal());
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }
}

#[tokio::test]
async fn test_request_delivery_success() {
    let delivery = Arc::new(MockSmsDelivery::new());
    let service = service_with(delivery.clone(), &["123456"]);
    let session = MemorySessionStore::new();

    let outcome = service
        .request_delivery(&principal(), &session, Some(PHONE))
        .await
        .unwrap();

    assert_eq!(outcome.masked_phone, "********1234");
    assert_eq!(
        outcome.message,
        "A verification code was sent to ********1234. Check your phone and enter the code."
    );

    let sent = delivery.last_sent().unwrap();
    assert_eq!(sent.message, "Your pgAdmin verification code is: 123456");
    assert_eq!(sent.from, "+15005550006");
    assert_eq!(sent.to, PHONE);

    assert_eq!(session.get(PENDING_OTP_KEY).unwrap().as_deref(), Some("123456"));
    assert_eq!(session.get(PENDING_PHONE_KEY).unwrap().as_deref(), Some(PHONE));
}

#[tokio::test]
async fn test_request_delivery_falls_back_to_session_phone() {
    let delivery = Arc::new(MockSmsDelivery::new());
    let service = service_with(delivery.clone(), &["111111"]);
    let session = MemorySessionStore::new();
    service.store_phone(&session, Some(PHONE)).unwrap();

    service
        .request_delivery(&principal(), &session, None)
        .await
        .unwrap();

    assert_eq!(delivery.last_sent().unwrap().to, PHONE);
}

#[tokio::test]
async fn test_request_delivery_without_any_phone() {
    let delivery = Arc::new(MockSmsDelivery::new());
    let service = service_with(delivery.clone(), &["111111"]);
    let session = MemorySessionStore::new();

    let err = service
        .request_delivery(&principal(), &session, Some(""))
        .await
        .unwrap_err();

    assert_eq!(mfa_error(err), MfaError::MissingPhoneNumber);
    assert_eq!(delivery.send_count(), 0);
    assert!(session.is_empty());
}

#[tokio::test]
async fn test_request_delivery_rejects_bad_format() {
    let delivery = Arc::new(MockSmsDelivery::new());
    let service = service_with(delivery.clone(), &["111111"]);
    let session = MemorySessionStore::new();

    for phone in ["4155551234", "+0123456789"] {
        let err = service
            .request_delivery(&principal(), &session, Some(phone))
            .await
            .unwrap_err();
        assert_eq!(
            mfa_error(err),
            MfaError::InvalidPhoneFormat {
                phone: phone.to_string()
            }
        );
    }

    assert_eq!(delivery.send_count(), 0);
    assert!(session.get(PENDING_OTP_KEY).unwrap().is_none());
}

#[tokio::test]
async fn test_missing_credentials_skip_the_provider() {
    let cases = [
        (
            ProviderCredentials {
                account_sid: None,
                ..ProviderCredentials::new("ACtest", "token", "+15005550006")
            },
            CredentialItem::AccountSid,
        ),
        (
            ProviderCredentials {
                auth_token: None,
                ..ProviderCredentials::new("ACtest", "token", "+15005550006")
            },
            CredentialItem::AuthToken,
        ),
        (
            ProviderCredentials {
                sender: Some(String::new()),
                ..ProviderCredentials::new("ACtest", "token", "+15005550006")
            },
            CredentialItem::SenderIdentity,
        ),
    ];

    for (credentials, item) in cases {
        let delivery = Arc::new(MockSmsDelivery::with_credentials(credentials));
        let service = service_with(delivery.clone(), &["222222"]);
        let session = MemorySessionStore::new();

        let err = service
            .request_delivery(&principal(), &session, Some(PHONE))
            .await
            .unwrap_err();

        assert_eq!(mfa_error(err), MfaError::ProviderNotConfigured { item });
        assert_eq!(delivery.send_count(), 0);
        assert!(session.get(PENDING_PHONE_KEY).unwrap().is_none());
    }
}

#[tokio::test]
async fn test_provider_failure_is_classified() {
    let delivery = Arc::new(MockSmsDelivery::failing(ProviderError::api(
        Some(21211),
        400,
        "The 'To' number +14155551234 is not a valid phone number.",
    )));
    let service = service_with(delivery, &["333333"]);
    let session = MemorySessionStore::new();

    let err = service
        .request_delivery(&principal(), &session, Some(PHONE))
        .await
        .unwrap_err();

    match mfa_error(err) {
        MfaError::ProviderTransportFailure { kind, .. } => {
            assert_eq!(kind, TransportFailureKind::InvalidPhoneNumber)
        }
        other => panic!("unexpected error: {:?}", other),
    }
    // Code stays resident, phone is never stored
    assert_eq!(session.get(PENDING_OTP_KEY).unwrap().as_deref(), Some("333333"));
    assert!(session.get(PENDING_PHONE_KEY).unwrap().is_none());
}

#[tokio::test]
async fn test_transport_failure_keeps_raw_detail() {
    let delivery = Arc::new(MockSmsDelivery::failing(ProviderError::transport(
        "error sending request: operation timed out",
    )));
    let service = service_with(delivery, &["333333"]);
    let session = MemorySessionStore::new();

    let err = service
        .request_delivery(&principal(), &session, Some(PHONE))
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Failed to send the code via SMS.\nerror sending request: operation timed out"
    );
}

#[tokio::test]
async fn test_verify_is_single_use() {
    let delivery = Arc::new(MockSmsDelivery::new());
    let service = service_with(delivery.clone(), &["654321"]);
    let session = MemorySessionStore::new();
    service
        .request_delivery(&principal(), &session, Some(PHONE))
        .await
        .unwrap();

    let code = delivery.last_code().unwrap();
    assert_eq!(code, "654321");

    service.verify(&session, Some(&code)).unwrap();
    let err = service.verify(&session, Some(&code)).unwrap_err();
    assert_eq!(mfa_error(err), MfaError::MissingPendingVerification);
}

#[tokio::test]
async fn test_verify_mismatch_keeps_code() {
    let delivery = Arc::new(MockSmsDelivery::new());
    let service = service_with(delivery, &["654321"]);
    let session = MemorySessionStore::new();
    service
        .request_delivery(&principal(), &session, Some(PHONE))
        .await
        .unwrap();

    let err = service.verify(&session, Some("000000")).unwrap_err();
    assert_eq!(mfa_error(err), MfaError::CodeMismatch);
    let err = service.verify(&session, Some("65432")).unwrap_err();
    assert_eq!(mfa_error(err), MfaError::CodeMismatch);

    service.verify(&session, Some("654321")).unwrap();
}

#[tokio::test]
async fn test_new_delivery_replaces_pending_code() {
    let delivery = Arc::new(MockSmsDelivery::new());
    let service = service_with(delivery, &["111111", "222222"]);
    let session = MemorySessionStore::new();

    service
        .request_delivery(&principal(), &session, Some(PHONE))
        .await
        .unwrap();
    service
        .request_delivery(&principal(), &session, Some(PHONE))
        .await
        .unwrap();

    let err = service.verify(&session, Some("111111")).unwrap_err();
    assert_eq!(mfa_error(err), MfaError::CodeMismatch);
    service.verify(&session, Some("222222")).unwrap();
}

#[test]
fn test_verify_without_input() {
    let service = service_with(Arc::new(MockSmsDelivery::new()), &["111111"]);
    let session = MemorySessionStore::new();

    let err = service.verify(&session, None).unwrap_err();
    assert_eq!(mfa_error(err), MfaError::MissingCode);
    let err = service.verify(&session, Some("")).unwrap_err();
    assert_eq!(mfa_error(err), MfaError::MissingCode);
    let err = service.verify(&session, Some("123456")).unwrap_err();
    assert_eq!(mfa_error(err), MfaError::MissingPendingVerification);
}

#[test]
fn test_store_phone_requires_value() {
    let service = service_with(Arc::new(MockSmsDelivery::new()), &["111111"]);
    let session = MemorySessionStore::new();

    let err = service.store_phone(&session, None).unwrap_err();
    assert_eq!(mfa_error(err), MfaError::MissingPhoneNumber);

    service.store_phone(&session, Some("not-validated")).unwrap();
    let pending = service.pending(&session).unwrap();
    assert_eq!(pending.phone_number.as_deref(), Some("not-validated"));
    assert!(!pending.has_code());
}

#[tokio::test]
async fn test_validation_view_drops_pending_code() {
    let delivery = Arc::new(MockSmsDelivery::new());
    let service = service_with(delivery, &["999999"]);
    let session = MemorySessionStore::new();
    service
        .request_delivery(&principal(), &session, Some(PHONE))
        .await
        .unwrap();

    let view = service.validation_view(&session).unwrap();
    assert_eq!(view.description, "Verify with SMS Authentication");
    assert_eq!(view.button_label, "Send Code");
    assert_eq!(view.button_label_sending, "Sending Code...");

    let pending = service.pending(&session).unwrap();
    assert!(pending.otp.is_none());
    assert_eq!(pending.phone_number.as_deref(), Some(PHONE));
}

#[tokio::test]
async fn test_clear_pending() {
    let delivery = Arc::new(MockSmsDelivery::new());
    let service = service_with(delivery, &["999999"]);
    let session = MemorySessionStore::new();
    service
        .request_delivery(&principal(), &session, Some(PHONE))
        .await
        .unwrap();

    service.clear_pending(&session).unwrap();
    assert!(service.pending(&session).unwrap().is_empty());
}
