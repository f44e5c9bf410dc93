//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod generate;
pub mod health;

use actix_web::web;

/// Configure every API route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(generate::configure_routes);
}
