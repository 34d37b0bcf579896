//! Cookie session wiring and the adapter that exposes an actix session as a
//! core [`SessionStore`].

use actix_session::{
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
    Session, SessionMiddleware,
};
use actix_web::cookie::{time::Duration, Key};

use sm_core::repositories::SessionStore;
use sm_shared::SessionConfig;

/// Pending verification slots backed by the request's session
pub struct ActixSessionStore<'a> {
    session: &'a Session,
}

impl<'a> ActixSessionStore<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }
}

impl SessionStore for ActixSessionStore<'_> {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        self.session.get::<String>(key).map_err(|e| e.to_string())
    }

    fn insert(&self, key: &str, value: &str) -> Result<(), String> {
        self.session.insert(key, value).map_err(|e| e.to_string())
    }

    fn remove(&self, key: &str) -> Result<Option<String>, String> {
        self.session.remove_as::<String>(key).transpose()
    }
}

/// Cookie signing key from configuration.
///
/// Falls back to a random key when none is configured or the configured one
/// is shorter than 64 bytes.
pub fn session_key(config: &SessionConfig) -> Key {
    match config.secret_key.as_deref() {
        Some(secret) => match Key::try_from(secret.as_bytes()) {
            Ok(key) => key,
            Err(e) => {
                tracing::warn!(error = %e, "Invalid session secret key, generating a random one");
                Key::generate()
            }
        },
        None => {
            tracing::warn!("No session secret key configured, sessions will not survive a restart");
            Key::generate()
        }
    }
}

/// Session middleware storing the whole session in a private (encrypted)
/// cookie.
pub fn session_middleware(config: &SessionConfig, key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(config.cookie_name.clone())
        .cookie_secure(config.secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .session_lifecycle(
            PersistentSession::default().session_ttl(Duration::seconds(config.ttl_seconds.max(1))),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_key_from_config() {
        let config = SessionConfig {
            secret_key: Some("k".repeat(64)),
            ..SessionConfig::default()
        };
        let first = session_key(&config);
        let second = session_key(&config);
        assert_eq!(first.master(), second.master());
    }

    #[test]
    fn test_short_session_key_is_replaced() {
        let config = SessionConfig {
            secret_key: Some("short".to_string()),
            ..SessionConfig::default()
        };
        assert_eq!(session_key(&config).master().len(), 64);
    }
}
