//! JWT caller authentication for the MFA endpoints.
//!
//! Tokens are issued by the primary login of the surrounding backend. The
//! extractor verifies the HS256 signature and expiry and exposes the `sub`
//! claim as the caller's username.

use actix_web::{dev::Payload, http::header::AUTHORIZATION, web, FromRequest, HttpRequest};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::future::{ready, Ready};

use sm_core::domain::value_objects::Principal;
use sm_shared::JwtConfig;

use crate::app::AppState;
use crate::handlers::ApiError;

/// Claims carried by caller tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Username of the caller
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

impl Claims {
    pub fn new(username: impl Into<String>, ttl_seconds: i64) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            sub: username.into(),
            exp: now + ttl_seconds,
            iat: now,
            iss: None,
        }
    }
}

/// An authenticated caller
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub username: String,
}

impl AuthenticatedUser {
    pub fn principal(&self) -> Principal {
        Principal::new(self.username.clone())
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, ApiError> {
    let Some(state) = req.app_data::<web::Data<AppState>>() else {
        tracing::error!("Application state missing, cannot verify caller token");
        return Err(ApiError::Unauthenticated);
    };

    let token = extract_bearer_token(req).ok_or_else(|| {
        tracing::debug!(path = %req.path(), "Missing or invalid Authorization header");
        ApiError::Unauthenticated
    })?;

    let claims = verify_token(&token, &state.jwt).map_err(|e| {
        tracing::warn!(path = %req.path(), error = %e, event = "token_rejected", "Caller token rejected");
        ApiError::Unauthenticated
    })?;

    if claims.sub.is_empty() {
        return Err(ApiError::Unauthenticated);
    }

    Ok(AuthenticatedUser {
        username: claims.sub,
    })
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn verify_token(token: &str, config: &JwtConfig) -> Result<Claims, jsonwebtoken::errors::Error> {
    let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    if let Some(issuer) = &config.issuer {
        validation.set_issuer(&[issuer]);
    }

    decode::<Claims>(token, &decoding_key, &validation).map(|data| data.claims)
}
