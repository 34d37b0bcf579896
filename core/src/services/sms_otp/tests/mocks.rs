//! Mock implementations for testing the SMS OTP service

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::value_objects::{Principal, ProviderCredentials, ProviderError};
use crate::services::otp::CodeGenerator;
use crate::services::sms_otp::SmsDeliveryTrait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentSms {
    pub message: String,
    pub from: String,
    pub to: String,
}

// Mock delivery collaborator recording every call
pub struct MockSmsDelivery {
    credentials: ProviderCredentials,
    pub sent: Arc<Mutex<Vec<SentSms>>>,
    pub failure: Mutex<Option<ProviderError>>,
}

impl MockSmsDelivery {
    pub fn new() -> Self {
        Self::with_credentials(ProviderCredentials::new(
            "ACtest",
            "test_token",
            "+15005550006",
        ))
    }

    pub fn with_credentials(credentials: ProviderCredentials) -> Self {
        Self {
            credentials,
            sent: Arc::new(Mutex::new(Vec::new())),
            failure: Mutex::new(None),
        }
    }

    pub fn failing(error: ProviderError) -> Self {
        let mock = Self::new();
        *mock.failure.lock().unwrap() = Some(error);
        mock
    }

    pub fn send_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last_sent(&self) -> Option<SentSms> {
        self.sent.lock().unwrap().last().cloned()
    }

    /// Code carried by the most recent message
    pub fn last_code(&self) -> Option<String> {
        self.last_sent()
            .and_then(|sms| sms.message.rsplit(' ').next().map(str::to_string))
    }
}

#[async_trait]
impl SmsDeliveryTrait for MockSmsDelivery {
    fn credentials(&self) -> &ProviderCredentials {
        &self.credentials
    }

    async fn send(&self, message: &str, from: &str, to: &str) -> Result<String, ProviderError> {
        if let Some(error) = self.failure.lock().unwrap().clone() {
            return Err(error);
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push(SentSms {
            message: message.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        });
        Ok(format!("SM{:032}", sent.len()))
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }

    async fn is_available(&self) -> bool {
        true
    }
}

// Generator returning queued codes, then repeating the last one
pub struct FixedCodeGenerator {
    codes: Mutex<VecDeque<String>>,
    last: Mutex<String>,
}

impl FixedCodeGenerator {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: Mutex::new(codes.iter().map(|c| c.to_string()).collect()),
            last: Mutex::new(codes.last().map(|c| c.to_string()).unwrap_or_default()),
        }
    }
}

impl CodeGenerator for FixedCodeGenerator {
    fn generate(&self, _principal: &Principal) -> String {
        match self.codes.lock().unwrap().pop_front() {
            Some(code) => code,
            None => self.last.lock().unwrap().clone(),
        }
    }
}
