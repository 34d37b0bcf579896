//! Registry of available MFA methods

use std::collections::BTreeMap;

use sm_shared::MfaConfig;

use crate::domain::value_objects::MfaMethod;

use super::authenticator::{MethodDescriptor, MfaAuthenticator, SmsAuthenticator};

pub type AuthenticatorFactory = fn() -> Box<dyn MfaAuthenticator>;

#[derive(Default)]
pub struct MfaRegistry {
    factories: BTreeMap<MfaMethod, AuthenticatorFactory>,
}

impl MfaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` for `method`, replacing any previous one.
    pub fn register(&mut self, method: MfaMethod, factory: AuthenticatorFactory) {
        if self.factories.insert(method, factory).is_some() {
            tracing::debug!(method = %method, "Replaced MFA authenticator");
        }
    }

    pub fn is_registered(&self, method: MfaMethod) -> bool {
        self.factories.contains_key(&method)
    }

    /// Instantiate the authenticator for `method`
    pub fn authenticator(&self, method: MfaMethod) -> Option<Box<dyn MfaAuthenticator>> {
        self.factories.get(&method).map(|factory| factory())
    }

    /// Registered methods in stable order
    pub fn methods(&self) -> Vec<MfaMethod> {
        self.factories.keys().copied().collect()
    }

    /// Descriptors of registered methods that are also listed as supported.
    /// Empty when MFA is disabled.
    pub fn descriptors(&self, config: &MfaConfig) -> Vec<MethodDescriptor> {
        if !config.enabled {
            return Vec::new();
        }
        self.factories
            .iter()
            .filter(|(method, _)| config.supports(method.as_str()))
            .map(|(_, factory)| factory().descriptor())
            .collect()
    }
}

/// Register the SMS authenticator and make sure configuration offers it.
///
/// Adds `sms` to the supported methods and turns MFA on when needed.
pub fn register_sms_method(registry: &mut MfaRegistry, config: &mut MfaConfig) {
    registry.register(MfaMethod::Sms, || Box::new(SmsAuthenticator));

    tracing::info!(
        supported = ?config.supported_methods,
        registered = ?registry.methods(),
        "Registered SMS authenticator"
    );

    let name = MfaMethod::Sms.as_str();
    if !config.supports(name) {
        config.supported_methods.push(name.to_string());
        tracing::info!("Added sms to supported MFA methods");
    }

    if !config.enabled {
        config.enabled = true;
        tracing::info!("Enabled MFA");
    }
}
