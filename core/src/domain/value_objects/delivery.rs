//! Result of a successful code delivery

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryOutcome {
    /// Identifier assigned by the SMS provider
    pub message_id: String,

    /// Destination with all but the last four characters masked
    pub masked_phone: String,

    /// User-facing confirmation
    pub message: String,
}

impl DeliveryOutcome {
    pub fn new(message_id: impl Into<String>, masked_phone: impl Into<String>) -> Self {
        let masked_phone = masked_phone.into();
        let message = format!(
            "A verification code was sent to {}. Check your phone and enter the code.",
            masked_phone
        );
        Self {
            message_id: message_id.into(),
            masked_phone,
            message,
        }
    }
}
