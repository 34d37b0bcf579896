//! Registration flow state, input and view models

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::MfaMethod;

/// Display label of the SMS method
pub const SMS_LABEL: &str = "SMS Authentication";

const SETUP_MARKER: &str = "SETUP";

/// Where a user is in the SMS registration flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistrationState {
    /// Asking for a phone number
    Setup,
    /// A code was delivered and is awaiting confirmation
    CodeSent,
    /// The method is enrolled
    Registered,
}

/// Raw registration form as submitted by the client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    /// `SETUP` requests the setup view
    pub sms: Option<String>,
    /// `send_code` or `verify_code`
    pub validate: Option<String>,
    /// Phone number for `send_code`
    pub send_to: Option<String>,
    /// Code for `verify_code`
    pub code: Option<String>,
}

/// Parsed registration action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationAction {
    Setup,
    SendCode { phone: Option<String> },
    VerifyCode { code: Option<String> },
    Unrecognized(Option<String>),
}

impl RegistrationForm {
    pub fn setup() -> Self {
        Self {
            sms: Some(SETUP_MARKER.to_string()),
            ..Default::default()
        }
    }

    pub fn send_code(phone: impl Into<String>) -> Self {
        Self {
            validate: Some("send_code".to_string()),
            send_to: Some(phone.into()),
            ..Default::default()
        }
    }

    pub fn verify_code(code: impl Into<String>) -> Self {
        Self {
            validate: Some("verify_code".to_string()),
            code: Some(code.into()),
            ..Default::default()
        }
    }

    /// Interpret the untyped fields. The setup marker wins over `validate`.
    pub fn action(&self) -> RegistrationAction {
        if self.sms.as_deref() == Some(SETUP_MARKER) {
            return RegistrationAction::Setup;
        }

        match self.validate.as_deref() {
            Some("send_code") => RegistrationAction::SendCode {
                phone: non_empty(&self.send_to),
            },
            Some("verify_code") => RegistrationAction::VerifyCode {
                code: non_empty(&self.code),
            },
            other => RegistrationAction::Unrecognized(other.map(str::to_string)),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|v| !v.is_empty()).map(str::to_string)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    Error,
    Success,
}

/// One-shot message shown with the next rendered view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub category: FlashCategory,
    pub text: String,
}

impl FlashMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            category: FlashCategory::Error,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            category: FlashCategory::Success,
            text: text.into(),
        }
    }
}

/// View model rendered for each registration step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationView {
    pub state: RegistrationState,
    pub label: String,
    pub auth_method: MfaMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number_placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp_placeholder: Option<String>,
    #[serde(default)]
    pub messages: Vec<FlashMessage>,
}

impl RegistrationView {
    fn base(state: RegistrationState) -> Self {
        Self {
            state,
            label: SMS_LABEL.to_string(),
            auth_method: MfaMethod::Sms,
            description: None,
            phone_number_placeholder: None,
            note: None,
            message: None,
            otp_placeholder: None,
            messages: Vec::new(),
        }
    }

    /// Phone number entry
    pub fn setup() -> Self {
        Self {
            description: Some("Enter your phone number to receive verification codes".to_string()),
            phone_number_placeholder: Some("Phone number with country code".to_string()),
            note: Some("Enter your phone number with country code (e.g., +1234567890)".to_string()),
            ..Self::base(RegistrationState::Setup)
        }
    }

    /// Code entry after a successful delivery
    pub fn code_sent(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            otp_placeholder: Some("Enter 6-digit code".to_string()),
            ..Self::base(RegistrationState::CodeSent)
        }
    }

    pub fn registered() -> Self {
        Self::base(RegistrationState::Registered)
    }

    pub fn with_message(mut self, flash: FlashMessage) -> Self {
        self.messages.push(flash);
        self
    }
}

/// Labels for the login-time challenge of an enrolled user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationView {
    pub auth_method: MfaMethod,
    pub label: String,
    pub description: String,
    pub button_label: String,
    pub button_label_sending: String,
}

impl Default for ValidationView {
    fn default() -> Self {
        Self {
            auth_method: MfaMethod::Sms,
            label: SMS_LABEL.to_string(),
            description: "Verify with SMS Authentication".to_string(),
            button_label: "Send Code".to_string(),
            button_label_sending: "Sending Code...".to_string(),
        }
    }
}
