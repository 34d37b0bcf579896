//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{CredentialItem, MfaError, TransportFailureKind};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Session store error: {message}")]
    Session { message: String },

    #[error("Enrollment registry error: {message}")]
    Enrollment { message: String },

    // Bridge to the MFA error taxonomy
    #[error(transparent)]
    Mfa(#[from] MfaError),
}

impl DomainError {
    /// The MFA failure behind this error, if it is one
    pub fn as_mfa(&self) -> Option<&MfaError> {
        match self {
            DomainError::Mfa(err) => Some(err),
            _ => None,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
