//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborators the core crate defines:
//! - **SMS**: Twilio REST client and an in-process mock provider

use thiserror::Error;

/// SMS service module - External SMS providers
pub mod sms;

pub use sms::{create_sms_service, MockSmsService, TwilioConfig, TwilioSmsService};

/// Infrastructure-specific errors
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
