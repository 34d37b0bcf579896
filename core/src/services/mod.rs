//! Business services containing domain logic and use cases.

pub mod otp;
pub mod registration;
pub mod registry;
pub mod sms_otp;

// Re-export commonly used types
pub use otp::{generator_for, CodeGenerator, DerivedCodeGenerator, SecureCodeGenerator};
pub use registration::RegistrationFlow;
pub use registry::{
    register_sms_method, MethodDescriptor, MfaAuthenticator, MfaRegistry, SmsAuthenticator,
};
pub use sms_otp::{SmsDeliveryTrait, SmsOtpConfig, SmsOtpService};
