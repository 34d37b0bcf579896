//! Completed MFA enrollment

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::MfaMethod;

/// A second factor registered for a user.
///
/// One record per `(username, method)`; re-enrolling replaces the phone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub username: String,
    pub method: MfaMethod,
    pub phone_number: String,
    pub enrolled_at: DateTime<Utc>,
}

impl Enrollment {
    pub fn new(username: impl Into<String>, method: MfaMethod, phone_number: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            method,
            phone_number: phone_number.into(),
            enrolled_at: Utc::now(),
        }
    }
}
