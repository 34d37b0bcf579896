//! SMS provider configuration

use serde::{Deserialize, Serialize};

/// Which delivery backend sends the codes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SmsProvider {
    /// Twilio Programmable Messaging
    #[default]
    Twilio,
    /// In-process recorder, never leaves the machine
    Mock,
}

/// SMS provider configuration.
///
/// Credentials stay optional here: a missing item is reported per request as
/// a "not configured" error instead of failing startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SmsConfig {
    /// Delivery backend
    pub provider: SmsProvider,

    /// Twilio Account SID
    pub account_sid: Option<String>,

    /// Twilio Auth Token
    pub auth_token: Option<String>,

    /// Sender phone number (a number owned by the Twilio account)
    pub sender: Option<String>,

    /// Product name used in the message body
    pub app_name: String,

    /// Base URL of the Twilio REST API
    pub api_base: String,

    /// Maximum attempts for retryable failures (429 and 5xx)
    pub max_retries: u32,

    /// Initial retry delay in milliseconds, doubled per attempt
    pub retry_delay_ms: u64,

    /// Timeout for a single API request in seconds
    pub request_timeout_secs: u64,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: SmsProvider::Twilio,
            account_sid: None,
            auth_token: None,
            sender: None,
            app_name: String::from("pgAdmin"),
            api_base: String::from("https://api.twilio.com"),
            max_retries: 3,
            retry_delay_ms: 1000,
            request_timeout_secs: 10,
        }
    }
}

impl SmsConfig {
    /// Fill empty credential fields from the conventional `TWILIO_*` variables.
    pub fn fill_from_provider_env(&mut self) {
        self.fill_from(|key| std::env::var(key).ok());
    }

    /// Fill empty credential fields using `lookup` for the `TWILIO_*` keys.
    pub fn fill_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        fill_slot(&mut self.account_sid, || lookup("TWILIO_ACCOUNT_SID"));
        fill_slot(&mut self.auth_token, || lookup("TWILIO_AUTH_TOKEN"));
        fill_slot(&mut self.sender, || lookup("TWILIO_PHONE_NUMBER"));
    }
}

fn fill_slot<F>(slot: &mut Option<String>, value: F)
where
    F: FnOnce() -> Option<String>,
{
    if slot.as_deref().map_or(true, str::is_empty) {
        if let Some(value) = value().filter(|v| !v.is_empty()) {
            *slot = Some(value);
        }
    }
}
