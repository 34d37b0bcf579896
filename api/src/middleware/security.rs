//! Security response headers.

use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;

/// Headers added to every response. Verification responses must never be
/// cached by intermediaries.
pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
        .add((header::X_FRAME_OPTIONS, "DENY"))
        .add((header::REFERRER_POLICY, "strict-origin-when-cross-origin"))
        .add((header::CACHE_CONTROL, "no-store"))
}
