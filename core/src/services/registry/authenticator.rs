//! Authenticator descriptors

use serde::{Deserialize, Serialize};

use crate::domain::entities::registration::SMS_LABEL;
use crate::domain::value_objects::MfaMethod;

/// Public description of a method, as listed to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub id: String,
    pub name: String,
    pub label: String,
    pub icon: String,
    pub validate_script: String,
    pub auth_method: MfaMethod,
}

/// A second factor pluggable into the MFA registry
pub trait MfaAuthenticator: Send + Sync {
    fn method(&self) -> MfaMethod;

    fn label(&self) -> &str;

    /// Icon URL shown next to the method
    fn icon(&self) -> &str;

    /// Client script driving the method's forms
    fn validate_script(&self) -> &str;

    fn descriptor(&self) -> MethodDescriptor {
        let name = self.method().as_str().to_string();
        MethodDescriptor {
            id: name.clone(),
            name,
            label: self.label().to_string(),
            icon: self.icon().to_string(),
            validate_script: self.validate_script().to_string(),
            auth_method: self.method(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SmsAuthenticator;

impl MfaAuthenticator for SmsAuthenticator {
    fn method(&self) -> MfaMethod {
        MfaMethod::Sms
    }

    fn label(&self) -> &str {
        SMS_LABEL
    }

    fn icon(&self) -> &str {
        "/mfa/static/images/sms_lock.svg"
    }

    fn validate_script(&self) -> &str {
        "/mfa/sms.js"
    }
}
