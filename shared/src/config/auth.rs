//! Caller authentication and session configuration

use serde::{Deserialize, Serialize};

const DEFAULT_JWT_SECRET: &str = "your-secret-key-change-in-production";

/// JWT configuration used to authenticate callers of the MFA endpoints.
///
/// Tokens are issued by the primary login of the surrounding backend; this
/// service only verifies them.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct JwtConfig {
    /// Shared HS256 secret
    pub secret: String,

    /// Expected issuer claim, if any
    pub issuer: Option<String>,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_JWT_SECRET),
            issuer: None,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}

/// Session cookie configuration. The pending OTP and phone number live in
/// this session.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Session cookie name
    pub cookie_name: String,

    /// Session cookie secure flag (HTTPS only)
    pub secure: bool,

    /// Session lifetime in seconds
    pub ttl_seconds: i64,

    /// Cookie signing/encryption key, at least 64 bytes. A random key is
    /// generated at startup when unset, which invalidates sessions on restart.
    pub secret_key: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: String::from("sms_mfa_session"),
            secure: false,
            ttl_seconds: 600,
            secret_key: None,
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Session configuration
    pub session: SessionConfig,
}
