//! SMS MFA route handlers
//!
//! Every endpoint requires an authenticated caller. The pending code and
//! phone number live in the caller's session cookie.

use actix_web::web;

pub mod methods;
pub mod register;
pub mod script;
pub mod send_code;
pub mod store_phone;
pub mod validate;
pub mod verify_code;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/send_sms_code", web::post().to(send_code::send_sms_code))
        .route("/verify_sms_code", web::post().to(verify_code::verify_sms_code))
        .route("/store_phone", web::post().to(store_phone::store_phone))
        .route("/sms.js", web::get().to(script::javascript))
        .route("/register", web::get().to(register::registration_page))
        .route("/register", web::post().to(register::submit_registration))
        .route("/validate", web::get().to(validate::validation_view))
        .route("/methods", web::get().to(methods::list_methods));
}
