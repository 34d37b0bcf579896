//! MFA method configuration

use serde::{Deserialize, Serialize};

/// How one-time codes are produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpStrategy {
    /// Hex-window derivation over timestamp, username and a small random
    /// number. Kept for compatibility with existing deployments.
    #[default]
    Derived,
    /// Uniform draw from the OS CSPRNG
    Secure,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MfaConfig {
    /// Whether MFA is enforced at all
    pub enabled: bool,

    /// Method names offered to users (e.g. `sms`)
    #[serde(deserialize_with = "super::deserialize_list")]
    pub supported_methods: Vec<String>,

    /// Code generation strategy
    pub otp_strategy: OtpStrategy,
}

impl Default for MfaConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            supported_methods: vec![String::from("sms")],
            otp_strategy: OtpStrategy::Derived,
        }
    }
}

impl MfaConfig {
    /// Whether `method` is listed as supported
    pub fn supports(&self, method: &str) -> bool {
        self.supported_methods.iter().any(|m| m == method)
    }
}
