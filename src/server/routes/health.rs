//! Health check endpoint

use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::debug;

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

/// Health status information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: Cow<'static, str>,
    /// Whether the upstream base URL and API key are both set
    pub api_configured: bool,
}

/// Basic health check endpoint
///
/// Always 200 while the process is serving; an unconfigured upstream is
/// reported through `api_configured` rather than a failing status.
pub async fn health_check(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    Ok(HttpResponse::Ok().json(HealthStatus {
        status: Cow::Borrowed("healthy"),
        api_configured: state.api_configured(),
    }))
}
