//! HTTP route modules

pub mod health;
pub mod rerank;

use actix_web::web;

/// Register every route the gateway serves
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    health::configure_routes(cfg);
    rerank::configure_routes(cfg);
}
