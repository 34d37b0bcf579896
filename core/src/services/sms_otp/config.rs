//! Configuration for the SMS OTP service

use sm_shared::SmsConfig;

#[derive(Debug, Clone)]
pub struct SmsOtpConfig {
    /// Product name shown in the message body
    pub app_name: String,
}

impl SmsOtpConfig {
    /// Body of the SMS carrying `code`
    pub fn message_body(&self, code: &str) -> String {
        format!("Your {} verification code is: {}", self.app_name, code)
    }
}

impl Default for SmsOtpConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("pgAdmin"),
        }
    }
}

impl From<&SmsConfig> for SmsOtpConfig {
    fn from(config: &SmsConfig) -> Self {
        Self {
            app_name: config.app_name.clone(),
        }
    }
}
