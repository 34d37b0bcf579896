//! MFA method identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Second factors this service can register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MfaMethod {
    /// One-time code delivered by SMS
    Sms,
}

impl MfaMethod {
    /// Stable identifier used in configuration, forms and storage
    pub fn as_str(&self) -> &'static str {
        match self {
            MfaMethod::Sms => "sms",
        }
    }
}

impl fmt::Display for MfaMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MfaMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sms" => Ok(MfaMethod::Sms),
            _ => Err(format!("Unknown MFA method: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!("SMS".parse::<MfaMethod>(), Ok(MfaMethod::Sms));
        assert_eq!(MfaMethod::Sms.to_string(), "sms");
        assert!("totp".parse::<MfaMethod>().is_err());
    }
}
