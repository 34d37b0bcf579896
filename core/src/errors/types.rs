//! Error types for the SMS OTP lifecycle and registration flow
//!
//! The `Display` text of each variant is the message shown to the user.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Provider credential items, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialItem {
    AccountSid,
    AuthToken,
    SenderIdentity,
}

impl fmt::Display for CredentialItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialItem::AccountSid => write!(f, "account SID"),
            CredentialItem::AuthToken => write!(f, "auth token"),
            CredentialItem::SenderIdentity => write!(f, "sender phone number"),
        }
    }
}

/// Coarse classification of a failed provider call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportFailureKind {
    /// The provider rejected the destination number
    InvalidPhoneNumber,
    /// The provider rejected the account credentials
    AuthenticationFailure,
    /// Anything else, including timeouts and connection failures
    Other,
}

/// Failures of the SMS MFA operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MfaError {
    #[error("Not accessible")]
    Unauthenticated,

    #[error("No phone number is available.")]
    MissingPhoneNumber,

    #[error("Invalid phone number format. Please use format: +14155551234")]
    InvalidPhoneFormat { phone: String },

    #[error("SMS provider {item} not configured")]
    ProviderNotConfigured { item: CredentialItem },

    #[error("{}", transport_message(*kind, detail))]
    ProviderTransportFailure {
        kind: TransportFailureKind,
        detail: String,
    },

    #[error("No verification code provided")]
    MissingCode,

    #[error("No verification code found. Please request a new code.")]
    MissingPendingVerification,

    #[error("Invalid verification code")]
    CodeMismatch,
}

fn transport_message(kind: TransportFailureKind, detail: &str) -> String {
    match kind {
        TransportFailureKind::InvalidPhoneNumber => "Invalid phone number format".to_string(),
        TransportFailureKind::AuthenticationFailure => {
            "Invalid SMS provider credentials".to_string()
        }
        TransportFailureKind::Other => format!("Failed to send the code via SMS.\n{}", detail),
    }
}
