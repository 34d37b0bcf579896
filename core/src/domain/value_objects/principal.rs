//! Authenticated caller identity

use serde::{Deserialize, Serialize};

/// The caller an MFA operation acts for.
///
/// Authentication itself happens outside this crate; the principal only
/// carries the identity string the OTP derivation and enrollment need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub username: String,
}

impl Principal {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}
