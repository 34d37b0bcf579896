pub mod auth;
pub mod cors;
pub mod security;
pub mod session;

pub use auth::{AuthenticatedUser, Claims};
pub use cors::create_cors;
pub use security::security_headers;
pub use session::{session_key, session_middleware, ActixSessionStore};
