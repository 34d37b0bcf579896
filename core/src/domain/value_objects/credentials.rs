//! SMS provider credentials

use sm_shared::SmsConfig;
use std::fmt;

use crate::errors::{CredentialItem, MfaError};

/// Credentials handed to a delivery collaborator at construction.
///
/// Items may be absent; [`ProviderCredentials::ensure_configured`] reports the
/// first missing one so the caller can fail before any network call.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ProviderCredentials {
    pub account_sid: Option<String>,
    pub auth_token: Option<String>,
    pub sender: Option<String>,
}

impl ProviderCredentials {
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        sender: impl Into<String>,
    ) -> Self {
        Self {
            account_sid: Some(account_sid.into()),
            auth_token: Some(auth_token.into()),
            sender: Some(sender.into()),
        }
    }

    /// Check account SID, auth token and sender, in that order.
    pub fn ensure_configured(&self) -> Result<(), MfaError> {
        let items = [
            (CredentialItem::AccountSid, &self.account_sid),
            (CredentialItem::AuthToken, &self.auth_token),
            (CredentialItem::SenderIdentity, &self.sender),
        ];

        for (item, value) in items {
            if value.as_deref().map_or(true, |v| v.trim().is_empty()) {
                return Err(MfaError::ProviderNotConfigured { item });
            }
        }
        Ok(())
    }

    /// Sender identity, empty when unset
    pub fn sender(&self) -> &str {
        self.sender.as_deref().unwrap_or_default()
    }
}

impl From<&SmsConfig> for ProviderCredentials {
    fn from(config: &SmsConfig) -> Self {
        Self {
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
            sender: config.sender.clone(),
        }
    }
}

// Never print the token.
impl fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .field("sender", &self.sender)
            .finish()
    }
}
