//! Twilio SMS Service Implementation
//!
//! Sends messages through the Twilio Programmable Messaging REST API.
//!
//! ## Features
//!
//! - Retry with exponential backoff on 429 and 5xx responses
//! - Per-request timeout
//! - Structured error codes passed through for classification
//! - Phone number masking in logs

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use sm_core::domain::value_objects::{ProviderCredentials, ProviderError};
use sm_core::services::SmsDeliveryTrait;
use sm_shared::phone::{is_valid_international_phone, mask_phone_number};
use sm_shared::SmsConfig;

use crate::InfrastructureError;

const API_VERSION: &str = "2010-04-01";

/// Twilio transport configuration
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    /// Base URL of the REST API
    pub api_base: String,
    /// Maximum attempts for retryable failures
    pub max_retries: u32,
    /// Initial retry delay in milliseconds
    pub retry_delay_ms: u64,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl Default for TwilioConfig {
    fn default() -> Self {
        Self::from(&SmsConfig::default())
    }
}

impl From<&SmsConfig> for TwilioConfig {
    fn from(config: &SmsConfig) -> Self {
        Self {
            api_base: config.api_base.trim_end_matches('/').to_string(),
            max_retries: config.max_retries,
            retry_delay_ms: config.retry_delay_ms,
            request_timeout_secs: config.request_timeout_secs,
        }
    }
}

/// Successful message creation response
#[derive(Debug, Deserialize)]
struct MessageResource {
    sid: String,
}

/// Error body returned by the Twilio API
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: Option<u32>,
    message: Option<String>,
}

/// Build a [`ProviderError`] from an error response.
pub(crate) fn parse_error_response(status: u16, body: &str) -> ProviderError {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => ProviderError::api(
            parsed.code,
            status,
            parsed.message.unwrap_or_else(|| body.to_string()),
        ),
        Err(_) => ProviderError::api(None, status, body.to_string()),
    }
}

/// Whether a failed response is worth another attempt
pub(crate) fn is_retryable(status: u16) -> bool {
    status == 429 || (500..600).contains(&status)
}

/// Backoff before the next attempt, saturating instead of overflowing
pub(crate) fn next_delay(delay: Duration) -> Duration {
    delay.saturating_mul(2)
}

/// Twilio SMS service implementation
pub struct TwilioSmsService {
    client: reqwest::Client,
    credentials: ProviderCredentials,
    config: TwilioConfig,
}

impl TwilioSmsService {
    /// Create a new Twilio SMS service
    pub fn new(
        credentials: ProviderCredentials,
        config: TwilioConfig,
    ) -> Result<Self, InfrastructureError> {
        if let Some(sender) = credentials.sender.as_deref().filter(|s| !s.is_empty()) {
            if !is_valid_international_phone(sender) {
                return Err(InfrastructureError::Config(format!(
                    "Twilio sender {} is not in international format",
                    mask_phone_number(sender)
                )));
            }
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs.max(1)))
            .build()?;

        match credentials.sender.as_deref() {
            Some(sender) => info!(
                "Twilio SMS service initialized with from number: {}",
                mask_phone_number(sender)
            ),
            None => warn!("Twilio SMS service initialized without a sender number"),
        }

        Ok(Self {
            client,
            credentials,
            config,
        })
    }

    /// Create from the layered SMS configuration
    pub fn from_config(config: &SmsConfig) -> Result<Self, InfrastructureError> {
        Self::new(ProviderCredentials::from(config), TwilioConfig::from(config))
    }

    fn account_url(&self, account_sid: &str) -> String {
        format!("{}/{}/Accounts/{}", self.config.api_base, API_VERSION, account_sid)
    }

    fn auth(&self) -> Result<(&str, &str), ProviderError> {
        match (
            self.credentials.account_sid.as_deref(),
            self.credentials.auth_token.as_deref(),
        ) {
            (Some(sid), Some(token)) => Ok((sid, token)),
            _ => Err(ProviderError::transport("Twilio credentials are not configured")),
        }
    }

    /// One POST to the Messages resource
    async fn send_once(&self, from: &str, to: &str, body: &str) -> Result<String, ProviderError> {
        let (sid, token) = self.auth()?;
        let url = format!("{}/Messages.json", self.account_url(sid));
        let form = [("To", to), ("From", from), ("Body", body)];

        let response = self
            .client
            .post(url)
            .basic_auth(sid, Some(token))
            .form(&form)
            .send()
            .await
            .map_err(|e| ProviderError::transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::transport(e.to_string()))?;

        if !status.is_success() {
            return Err(parse_error_response(status.as_u16(), &text));
        }

        serde_json::from_str::<MessageResource>(&text)
            .map(|resource| resource.sid)
            .map_err(|e| ProviderError::transport(format!("Unexpected Twilio response: {}", e)))
    }

    /// Send SMS with retry logic
    async fn send_with_retry(
        &self,
        from: &str,
        to: &str,
        body: &str,
    ) -> Result<String, ProviderError> {
        let max_attempts = self.config.max_retries.max(1);
        let mut attempts = 0;
        let mut delay = Duration::from_millis(self.config.retry_delay_ms);

        loop {
            attempts += 1;

            debug!(
                "Sending SMS attempt {}/{} to {}",
                attempts,
                max_attempts,
                mask_phone_number(to)
            );

            match self.send_once(from, to, body).await {
                Ok(message_sid) => {
                    info!(
                        "SMS sent successfully to {} with SID: {}",
                        mask_phone_number(to),
                        message_sid
                    );
                    return Ok(message_sid);
                }
                Err(e) => {
                    error!(
                        "Failed to send SMS (attempt {}/{}): {}",
                        attempts, max_attempts, e
                    );

                    let retryable = e.status.map_or(false, is_retryable);
                    if !retryable || attempts >= max_attempts {
                        return Err(e);
                    }

                    if e.status == Some(429) {
                        warn!("Rate limit detected, backing off for {:?}", delay);
                    } else {
                        warn!("Server error detected, retrying after {:?}", delay);
                    }

                    tokio::time::sleep(delay).await;
                    delay = next_delay(delay);
                }
            }
        }
    }
}

#[async_trait]
impl SmsDeliveryTrait for TwilioSmsService {
    fn credentials(&self) -> &ProviderCredentials {
        &self.credentials
    }

    async fn send(&self, message: &str, from: &str, to: &str) -> Result<String, ProviderError> {
        info!(
            "Sending SMS to {} via Twilio (message length: {} chars)",
            mask_phone_number(to),
            message.len()
        );
        self.send_with_retry(from, to, message).await
    }

    fn provider_name(&self) -> &str {
        "Twilio"
    }

    /// Fetch the account resource to confirm the credentials
    async fn is_available(&self) -> bool {
        let Ok((sid, token)) = self.auth() else {
            return false;
        };
        let url = format!("{}.json", self.account_url(sid));

        match self.client.get(url).basic_auth(sid, Some(token)).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                warn!(status = response.status().as_u16(), "Twilio account check failed");
                false
            }
            Err(e) => {
                warn!(error = %e, "Twilio account check failed");
                false
            }
        }
    }
}
