//! Delivery collaborator trait

use async_trait::async_trait;

use crate::domain::value_objects::{ProviderCredentials, ProviderError};

/// Trait for SMS provider integration
#[async_trait]
pub trait SmsDeliveryTrait: Send + Sync {
    /// Credentials injected at construction
    fn credentials(&self) -> &ProviderCredentials;

    /// Send `message` from `from` to `to`, returning the provider message id
    async fn send(&self, message: &str, from: &str, to: &str) -> Result<String, ProviderError>;

    /// Provider name for logs and health output
    fn provider_name(&self) -> &str;

    /// Whether the provider accepts the configured credentials
    async fn is_available(&self) -> bool;
}
