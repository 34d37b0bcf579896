//! MFA method registry
//!
//! Built once at process start; maps each [`MfaMethod`] to a factory for
//! its authenticator descriptor.

mod authenticator;
mod method_registry;

pub use authenticator::{MethodDescriptor, MfaAuthenticator, SmsAuthenticator};
pub use method_registry::{register_sms_method, AuthenticatorFactory, MfaRegistry};

pub use crate::domain::value_objects::MfaMethod;
