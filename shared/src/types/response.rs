//! API response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Plain success response carrying a user-facing message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Whether the request was successful
    pub success: bool,

    /// Human-readable message
    pub message: String,

    /// Response timestamp
    pub timestamp: DateTime<Utc>,
}

impl MessageResponse {
    /// Create a successful response with a message
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,

    /// Whether MFA is enabled
    pub mfa_enabled: bool,

    /// Active SMS provider name
    pub sms_provider: String,

    /// Server timestamp
    pub timestamp: DateTime<Utc>,

    /// Server version
    pub version: String,
}

/// Health status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}
