use serde::{Deserialize, Serialize};
use validator::Validate;

use sm_core::domain::entities::registration::SMS_LABEL;
use sm_core::domain::value_objects::{DeliveryOutcome, MfaMethod};
use sm_core::services::MethodDescriptor;

const DEFAULT_NEXT_URL: &str = "internal";

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SendSmsCodeRequest {
    /// Phone number in international format, e.g. "+14155551234"
    #[validate(length(max = 32, message = "Phone number is too long"))]
    pub send_to: Option<String>,

    /// Where the client continues after verification
    #[validate(length(max = 2048))]
    pub next: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct VerifySmsCodeRequest {
    #[validate(length(max = 16, message = "Verification code is too long"))]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct StorePhoneRequest {
    #[validate(length(max = 32, message = "Phone number is too long"))]
    pub phone: Option<String>,
}

/// Verification step shown after a code was sent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationViewResponse {
    pub label: String,
    pub auth_method: String,
    pub description: String,
    pub otp_placeholder: String,
    pub show_verification: bool,
    pub masked_phone: String,
    pub message: String,
    pub next_url: String,
}

impl VerificationViewResponse {
    pub fn new(outcome: DeliveryOutcome, next_url: Option<String>) -> Self {
        Self {
            label: SMS_LABEL.to_string(),
            auth_method: MfaMethod::Sms.to_string(),
            description: "Enter the verification code sent to your phone".to_string(),
            otp_placeholder: "Enter 6-digit code".to_string(),
            show_verification: true,
            masked_phone: outcome.masked_phone,
            message: outcome.message,
            next_url: next_url
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| DEFAULT_NEXT_URL.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodsResponse {
    pub enabled: bool,
    pub methods: Vec<MethodDescriptor>,
}
