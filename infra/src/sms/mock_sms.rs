//! Mock SMS Service Implementation
//!
//! Records messages instead of sending them, for development and tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};
use uuid::Uuid;

use sm_core::domain::value_objects::{ProviderCredentials, ProviderError};
use sm_core::services::SmsDeliveryTrait;
use sm_shared::phone::mask_phone_number;
use sm_shared::SmsConfig;

/// A message captured by [`MockSmsService`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedSms {
    pub message_id: String,
    pub from: String,
    pub to: String,
    pub body: String,
}

/// Mock SMS service for development and testing
#[derive(Clone)]
pub struct MockSmsService {
    credentials: ProviderCredentials,
    messages: Arc<Mutex<Vec<RecordedSms>>>,
    failure: Option<ProviderError>,
}

impl MockSmsService {
    /// Create a mock with placeholder credentials
    pub fn new() -> Self {
        Self::with_credentials(ProviderCredentials::new("ACmock", "mock", "+15005550006"))
    }

    pub fn with_credentials(credentials: ProviderCredentials) -> Self {
        Self {
            credentials,
            messages: Arc::new(Mutex::new(Vec::new())),
            failure: None,
        }
    }

    /// Mock built from configuration; missing credential items are filled
    /// with placeholders so the mock works without a provider account.
    pub fn from_config(config: &SmsConfig) -> Self {
        let mut credentials = ProviderCredentials::from(config);
        credentials.account_sid.get_or_insert_with(|| "ACmock".to_string());
        credentials.auth_token.get_or_insert_with(|| "mock".to_string());
        credentials.sender.get_or_insert_with(|| "+15005550006".to_string());
        Self::with_credentials(credentials)
    }

    /// Fail every send with `error`
    pub fn with_failure(mut self, error: ProviderError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Messages recorded so far
    pub fn messages(&self) -> Vec<RecordedSms> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }

    /// Get the total number of messages sent
    pub fn message_count(&self) -> usize {
        self.messages.lock().map(|m| m.len()).unwrap_or_default()
    }

    /// Six-digit code at the end of the latest message sent to `to`
    pub fn last_code_for(&self, to: &str) -> Option<String> {
        self.messages()
            .into_iter()
            .rev()
            .find(|sms| sms.to == to)
            .and_then(|sms| sms.body.rsplit(' ').next().map(str::to_string))
    }
}

impl Default for MockSmsService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmsDeliveryTrait for MockSmsService {
    fn credentials(&self) -> &ProviderCredentials {
        &self.credentials
    }

    async fn send(&self, message: &str, from: &str, to: &str) -> Result<String, ProviderError> {
        let masked_phone = mask_phone_number(to);

        if let Some(error) = &self.failure {
            warn!("Mock SMS service simulating failure for phone: {}", masked_phone);
            return Err(error.clone());
        }

        let message_id = format!("mock_{}", Uuid::new_v4().simple());
        let recorded = RecordedSms {
            message_id: message_id.clone(),
            from: from.to_string(),
            to: to.to_string(),
            body: message.to_string(),
        };
        self.messages
            .lock()
            .map_err(|e| ProviderError::transport(e.to_string()))?
            .push(recorded);

        // Development only: the body carries the code
        debug!(target: "sms_service", provider = "mock", body = %message, "Mock SMS content");
        info!(
            target: "sms_service",
            provider = "mock",
            phone = %masked_phone,
            message_id = %message_id,
            message_length = message.len(),
            "SMS sent successfully (mock)"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }

    async fn is_available(&self) -> bool {
        self.failure.is_none()
    }
}
