//! Route table

use actix_web::web;

pub mod health;
pub mod mfa;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(web::scope("/mfa").configure(mfa::configure));
}
