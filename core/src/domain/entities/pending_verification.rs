//! Session-scoped pending verification

use serde::{Deserialize, Serialize};

/// Session slot holding the code awaiting verification
pub const PENDING_OTP_KEY: &str = "pending_otp";

/// Session slot holding the phone number the code was sent to
pub const PENDING_PHONE_KEY: &str = "pending_phone";

/// Length of generated codes
pub const CODE_LENGTH: usize = 6;

/// Snapshot of the two session slots.
///
/// At most one code is pending per session; a new delivery overwrites it.
/// Nothing here expires on its own, the session's lifetime bounds it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingVerification {
    pub phone_number: Option<String>,
    pub otp: Option<String>,
}

impl PendingVerification {
    /// Whether a code is waiting to be verified
    pub fn has_code(&self) -> bool {
        self.otp.is_some()
    }

    /// Whether neither slot is set
    pub fn is_empty(&self) -> bool {
        self.phone_number.is_none() && self.otp.is_none()
    }
}
