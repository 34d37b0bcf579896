//! Value objects representing immutable domain concepts.

pub mod credentials;
pub mod delivery;
pub mod mfa_method;
pub mod principal;
pub mod provider_error;

// Re-export commonly used types
pub use credentials::ProviderCredentials;
pub use delivery::DeliveryOutcome;
pub use mfa_method::MfaMethod;
pub use principal::Principal;
pub use provider_error::ProviderError;
