//! Domain entities for the SMS MFA flows.

pub mod enrollment;
pub mod pending_verification;
pub mod registration;

// Re-export commonly used types
pub use enrollment::Enrollment;
pub use pending_verification::{PendingVerification, PENDING_OTP_KEY, PENDING_PHONE_KEY};
pub use registration::{
    FlashCategory, FlashMessage, RegistrationAction, RegistrationForm, RegistrationState,
    RegistrationView, ValidationView,
};
