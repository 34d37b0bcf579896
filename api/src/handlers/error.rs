//! Conversion of domain failures into HTTP responses.
//!
//! Every failure leaves the API as a JSON [`ErrorResponse`]; the status code
//! and error code are decided here and nowhere else.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use std::collections::HashMap;
use thiserror::Error;
use validator::ValidationErrors;

use sm_core::errors::{DomainError, MfaError, TransportFailureKind};
use sm_shared::{error_codes, ErrorResponse};

pub const MSG_PHONE_NOT_PROVIDED: &str = "No phone number provided";

/// Error type returned by handlers and extractors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not accessible")]
    Unauthenticated,

    #[error("{message}")]
    BadRequest { code: &'static str, message: String },

    #[error("Invalid request data")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ApiError {
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            code,
            message: message.into(),
        }
    }

    /// The 400 returned when a form carries no phone number
    pub fn phone_not_provided() -> Self {
        Self::bad_request(error_codes::PHONE_MISSING, MSG_PHONE_NOT_PROVIDED)
    }
}

impl From<MfaError> for ApiError {
    fn from(err: MfaError) -> Self {
        ApiError::Domain(err.into())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest { .. } | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Domain(err) => domain_status(err).0,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Unauthenticated => HttpResponse::Unauthorized().json(ErrorResponse::new(
                error_codes::UNAUTHENTICATED,
                MfaError::Unauthenticated.to_string(),
            )),
            ApiError::BadRequest { code, message } => {
                HttpResponse::BadRequest().json(ErrorResponse::new(*code, message.clone()))
            }
            ApiError::Validation(errors) => {
                HttpResponse::BadRequest().json(ErrorResponse::with_details(
                    error_codes::VALIDATION_ERROR,
                    "Invalid request data",
                    field_errors(errors),
                ))
            }
            ApiError::Domain(err) => handle_domain_error(err),
        }
    }
}

/// Build the HTTP response for a domain error
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let (status, code) = domain_status(error);

    let message = match error {
        DomainError::Mfa(err) => err.to_string(),
        DomainError::Session { message } => {
            tracing::error!(error = %message, "Session store failure");
            "Session unavailable. Please sign in again.".to_string()
        }
        DomainError::Enrollment { message } => {
            tracing::error!(error = %message, "Internal failure");
            "Internal server error".to_string()
        }
    };

    HttpResponse::build(status).json(ErrorResponse::new(code, message))
}

/// Status and error code for a domain error
pub fn domain_status(error: &DomainError) -> (StatusCode, &'static str) {
    match error {
        DomainError::Mfa(err) => mfa_status(err),
        DomainError::Session { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, error_codes::SESSION_ERROR)
        }
        DomainError::Enrollment { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR)
        }
    }
}

fn mfa_status(error: &MfaError) -> (StatusCode, &'static str) {
    match error {
        MfaError::Unauthenticated => (StatusCode::UNAUTHORIZED, error_codes::UNAUTHENTICATED),
        MfaError::MissingPhoneNumber => (StatusCode::BAD_REQUEST, error_codes::PHONE_MISSING),
        MfaError::InvalidPhoneFormat { .. } => (StatusCode::BAD_REQUEST, error_codes::PHONE_INVALID),
        MfaError::ProviderNotConfigured { .. } => {
            (StatusCode::SERVICE_UNAVAILABLE, error_codes::SMS_NOT_CONFIGURED)
        }
        MfaError::ProviderTransportFailure { kind, .. } => match kind {
            TransportFailureKind::InvalidPhoneNumber => {
                (StatusCode::BAD_REQUEST, error_codes::PHONE_INVALID)
            }
            TransportFailureKind::AuthenticationFailure | TransportFailureKind::Other => {
                (StatusCode::SERVICE_UNAVAILABLE, error_codes::SMS_ERROR)
            }
        },
        MfaError::MissingCode => (StatusCode::BAD_REQUEST, error_codes::VERIFICATION_CODE_MISSING),
        MfaError::MissingPendingVerification => {
            (StatusCode::BAD_REQUEST, error_codes::VERIFICATION_NOT_PENDING)
        }
        MfaError::CodeMismatch => (StatusCode::BAD_REQUEST, error_codes::VERIFICATION_CODE_INVALID),
    }
}

fn field_errors(errors: &ValidationErrors) -> HashMap<String, serde_json::Value> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages: Vec<String> = errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), json!(messages))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sm_core::errors::CredentialItem;

    #[test]
    fn test_mfa_status_mapping() {
        let cases = [
            (MfaError::MissingPhoneNumber, 400),
            (
                MfaError::InvalidPhoneFormat {
                    phone: "123".into(),
                },
                400,
            ),
            (
                MfaError::ProviderNotConfigured {
                    item: CredentialItem::AuthToken,
                },
                503,
            ),
            (
                MfaError::ProviderTransportFailure {
                    kind: TransportFailureKind::InvalidPhoneNumber,
                    detail: String::new(),
                },
                400,
            ),
            (
                MfaError::ProviderTransportFailure {
                    kind: TransportFailureKind::AuthenticationFailure,
                    detail: String::new(),
                },
                503,
            ),
            (MfaError::MissingCode, 400),
            (MfaError::MissingPendingVerification, 400),
            (MfaError::CodeMismatch, 400),
            (MfaError::Unauthenticated, 401),
        ];

        for (err, status) in cases {
            let api = ApiError::from(err);
            assert_eq!(api.status_code().as_u16(), status, "{:?}", api);
        }
    }

    #[test]
    fn test_session_errors_are_500() {
        let err = DomainError::Session {
            message: "cookie too large".into(),
        };
        let (status, code) = domain_status(&err);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, error_codes::SESSION_ERROR);
    }

    #[test]
    fn test_enrollment_errors_are_500() {
        let err = DomainError::Enrollment {
            message: "registry unavailable".into(),
        };
        let (status, code) = domain_status(&err);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, error_codes::INTERNAL_ERROR);
        assert_eq!(
            handle_domain_error(&err).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_phone_not_provided() {
        let err = ApiError::phone_not_provided();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "No phone number provided");
    }
}
