//! Failure reported by an SMS delivery collaborator

use std::fmt;

use crate::errors::{MfaError, TransportFailureKind};

/// Twilio: the 'To' number is not a valid phone number
const CODE_INVALID_TO_NUMBER: u32 = 21211;
/// Twilio: the 'To' number is not a mobile number
const CODE_NOT_MOBILE_NUMBER: u32 = 21614;
/// Twilio: authentication error, invalid username or password
const CODE_AUTHENTICATION_FAILED: u32 = 20003;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    /// Provider-specific error code, when the provider returned one
    pub code: Option<u32>,

    /// HTTP status of the provider response, if a response was received
    pub status: Option<u16>,

    /// Raw error text
    pub message: String,
}

impl ProviderError {
    /// Error from a structured provider response
    pub fn api(code: Option<u32>, status: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            status: Some(status),
            message: message.into(),
        }
    }

    /// Error raised before any response arrived (timeout, connection reset)
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            code: None,
            status: None,
            message: message.into(),
        }
    }

    /// Classify by structured code first, then by the error text.
    pub fn classify(&self) -> TransportFailureKind {
        match self.code {
            Some(CODE_INVALID_TO_NUMBER) | Some(CODE_NOT_MOBILE_NUMBER) => {
                return TransportFailureKind::InvalidPhoneNumber
            }
            Some(CODE_AUTHENTICATION_FAILED) => return TransportFailureKind::AuthenticationFailure,
            _ => {}
        }

        // Text fallback for providers without structured codes.
        let text = self.message.to_lowercase();
        if text.contains("not a valid phone number") {
            TransportFailureKind::InvalidPhoneNumber
        } else if text.contains("authenticate") {
            TransportFailureKind::AuthenticationFailure
        } else {
            TransportFailureKind::Other
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.status, self.code) {
            (Some(status), Some(code)) => {
                write!(f, "HTTP {} error: Unable to create record: {} (code {})", status, self.message, code)
            }
            (Some(status), None) => write!(f, "HTTP {} error: {}", status, self.message),
            _ => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ProviderError {}

impl From<ProviderError> for MfaError {
    fn from(err: ProviderError) -> Self {
        MfaError::ProviderTransportFailure {
            kind: err.classify(),
            detail: err.to_string(),
        }
    }
}
