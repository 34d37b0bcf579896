//! SMS one-time-password lifecycle
//!
//! Generates a code, stores it in the caller's session, hands it to an SMS
//! delivery collaborator and verifies a later submission exactly once.

mod config;
mod service;
mod traits;

#[cfg(test)]
pub(crate) mod tests;

pub use config::SmsOtpConfig;
pub use service::SmsOtpService;
pub use traits::SmsDeliveryTrait;
