//! # SMS MFA Core
//!
//! Domain layer of the SMS multi-factor authentication service: the OTP
//! lifecycle, the registration flow, the method registry and the repository
//! interfaces the outer layers implement.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
