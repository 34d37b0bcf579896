use crate::errors::{CredentialItem, DomainError, MfaError, TransportFailureKind};

#[test]
fn test_provider_not_configured_names_the_item() {
    let error = MfaError::ProviderNotConfigured {
        item: CredentialItem::AuthToken,
    };
    assert_eq!(error.to_string(), "SMS provider auth token not configured");

    let error = MfaError::ProviderNotConfigured {
        item: CredentialItem::SenderIdentity,
    };
    assert_eq!(
        error.to_string(),
        "SMS provider sender phone number not configured"
    );
}

#[test]
fn test_transport_failure_messages() {
    let invalid = MfaError::ProviderTransportFailure {
        kind: TransportFailureKind::InvalidPhoneNumber,
        detail: "The 'To' number +1999 is not a valid phone number.".to_string(),
    };
    assert_eq!(invalid.to_string(), "Invalid phone number format");

    let auth = MfaError::ProviderTransportFailure {
        kind: TransportFailureKind::AuthenticationFailure,
        detail: "Authenticate".to_string(),
    };
    assert_eq!(auth.to_string(), "Invalid SMS provider credentials");

    let other = MfaError::ProviderTransportFailure {
        kind: TransportFailureKind::Other,
        detail: "operation timed out".to_string(),
    };
    assert_eq!(
        other.to_string(),
        "Failed to send the code via SMS.\noperation timed out"
    );
}

#[test]
fn test_verification_messages() {
    assert_eq!(MfaError::MissingCode.to_string(), "No verification code provided");
    assert_eq!(
        MfaError::MissingPendingVerification.to_string(),
        "No verification code found. Please request a new code."
    );
    assert_eq!(MfaError::CodeMismatch.to_string(), "Invalid verification code");
}

#[test]
fn test_domain_error_bridges_mfa_error() {
    let error: DomainError = MfaError::CodeMismatch.into();
    assert_eq!(error.as_mfa(), Some(&MfaError::CodeMismatch));
    assert_eq!(error.to_string(), "Invalid verification code");

    let session = DomainError::Session {
        message: "cookie too large".to_string(),
    };
    assert!(session.as_mfa().is_none());
}
