//! SMS Service Module
//!
//! Delivery collaborators for the OTP service:
//!
//! - **Twilio**: production delivery through the REST API
//! - **Mock**: records messages in memory for development and tests

use std::sync::Arc;

use sm_core::services::SmsDeliveryTrait;
use sm_shared::{SmsConfig, SmsProvider};

pub mod mock_sms;
pub mod twilio;

pub use mock_sms::{MockSmsService, RecordedSms};
pub use twilio::{TwilioConfig, TwilioSmsService};

use crate::InfrastructureError;

#[cfg(test)]
mod tests;

/// Create the SMS delivery collaborator selected by configuration
pub fn create_sms_service(
    config: &SmsConfig,
) -> Result<Arc<dyn SmsDeliveryTrait>, InfrastructureError> {
    let service: Arc<dyn SmsDeliveryTrait> = match config.provider {
        SmsProvider::Twilio => Arc::new(TwilioSmsService::from_config(config)?),
        SmsProvider::Mock => {
            tracing::warn!("Using mock SMS provider, no messages will be delivered");
            Arc::new(MockSmsService::from_config(config))
        }
    };
    Ok(service)
}
