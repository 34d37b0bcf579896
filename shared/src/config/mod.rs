//! Configuration module with business-specific sub-modules
//!
//! - `auth` - caller authentication and session cookie configuration
//! - `environment` - environment detection and logging configuration
//! - `mfa` - enabled MFA methods and OTP strategy
//! - `server` - HTTP server and CORS configuration
//! - `sms` - SMS provider credentials and delivery tuning
//!
//! Values are layered: struct defaults, then an optional per-environment
//! TOML file, then `SMS_MFA__*` environment variables.

pub mod auth;
pub mod environment;
pub mod mfa;
pub mod server;
pub mod sms;

use serde::{Deserialize, Deserializer, Serialize};

pub use auth::{AuthConfig, JwtConfig, SessionConfig};
pub use config::ConfigError;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use mfa::{MfaConfig, OtpStrategy};
pub use server::{CorsConfig, ServerConfig};
pub use sms::{SmsConfig, SmsProvider};

/// Prefix for environment variable overrides (`SMS_MFA__SERVER__PORT=9000`)
pub const ENV_PREFIX: &str = "SMS_MFA";

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// SMS provider configuration
    pub sms: SmsConfig,

    /// MFA method configuration
    pub mfa: MfaConfig,

    /// CORS configuration
    pub cors: CorsConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the environment named by `ENVIRONMENT`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_for(Environment::from_env())
    }

    /// Load configuration for an explicit environment.
    pub fn load_for(environment: Environment) -> Result<Self, ConfigError> {
        let defaults = config::Config::try_from(&Self::for_environment(environment))?;

        let layered = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::with_name(environment.config_file()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        let mut app: AppConfig = layered.try_deserialize()?;
        app.environment = environment;
        app.sms.fill_from_provider_env();
        Ok(app)
    }

    /// Defaults appropriate for an environment before any file or env overrides.
    pub fn for_environment(environment: Environment) -> Self {
        let mut config = Self {
            environment,
            logging: LoggingConfig::for_environment(environment),
            ..Self::default()
        };

        if environment.is_production() {
            config.auth.session.secure = true;
        }
        if environment.is_development() {
            config.cors = CorsConfig::development();
        }
        config
    }
}

/// Accept either a sequence or a comma-separated string.
///
/// Environment overrides arrive as plain strings; values are never coerced to
/// numbers so phone numbers and tokens keep their leading `+` and zeros.
pub(crate) fn deserialize_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ListOrString {
        List(Vec<String>),
        Joined(String),
    }

    Ok(match ListOrString::deserialize(deserializer)? {
        ListOrString::List(items) => items,
        ListOrString::Joined(joined) => joined
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_defaults() {
        let config = AppConfig::for_environment(Environment::Development);
        assert_eq!(config.environment, Environment::Development);
        assert!(!config.auth.session.secure);
        assert!(config.mfa.enabled);
        assert_eq!(config.mfa.supported_methods, vec!["sms".to_string()]);
        assert_eq!(config.cors.allowed_origins, vec!["*".to_string()]);
    }

    #[test]
    fn test_production_defaults_use_secure_cookies() {
        let config = AppConfig::for_environment(Environment::Production);
        assert!(config.auth.session.secure);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_env_overrides_keep_string_values() {
        std::env::set_var("SMS_MFA__SMS__SENDER", "+14155551234");
        std::env::set_var("SMS_MFA__SMS__AUTH_TOKEN", "0012345");
        std::env::set_var("SMS_MFA__SERVER__PORT", "9100");
        std::env::set_var(
            "SMS_MFA__CORS__ALLOWED_ORIGINS",
            "https://a.example, https://b.example",
        );

        let loaded = AppConfig::load_for(Environment::Development);

        for key in [
            "SMS_MFA__SMS__SENDER",
            "SMS_MFA__SMS__AUTH_TOKEN",
            "SMS_MFA__SERVER__PORT",
            "SMS_MFA__CORS__ALLOWED_ORIGINS",
        ] {
            std::env::remove_var(key);
        }

        let config = loaded.unwrap();
        assert_eq!(config.sms.sender.as_deref(), Some("+14155551234"));
        assert_eq!(config.sms.auth_token.as_deref(), Some("0012345"));
        assert_eq!(config.server.port, 9100);
        assert_eq!(
            config.cors.allowed_origins,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
        assert_eq!(config.mfa.supported_methods, vec!["sms".to_string()]);
    }
}
