use actix_web::HttpResponse;

use crate::middleware::AuthenticatedUser;

const SMS_SCRIPT: &str = include_str!("../../../static/sms.js");

/// Handler for GET /mfa/sms.js
pub async fn javascript(_user: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/javascript; charset=utf-8")
        .body(SMS_SCRIPT)
}
