pub mod health;
pub mod payment;

use actix_web::web;

/// Mount every relay endpoint.
pub fn configure(cfg: &mut web::ServiceConfig) {
    health::configure(cfg);
    payment::configure(cfg);
}
