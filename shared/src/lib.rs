//! Shared utilities and common types for the SMS MFA service
//!
//! This crate provides common functionality used across all server modules:
//! - Layered configuration types
//! - Error response structures
//! - Phone number utilities
//! - Response wrappers

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, CorsConfig, Environment, JwtConfig, LoggingConfig,
    MfaConfig, OtpStrategy, ServerConfig, SessionConfig, SmsConfig, SmsProvider,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{HealthResponse, MessageResponse};
pub use utils::phone;
