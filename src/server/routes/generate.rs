//! Prompt generation endpoint

use crate::core::{GenerationRequest, GenerationResult, ResolvedMode};
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::{HttpResponse, ResponseError, web};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Configure generation routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/generate", web::post().to(generate));
}

/// Request body for `POST /generate`
///
/// A missing `mode` is reported as an invalid mode, not as a malformed body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub scene: Option<String>,
}

impl From<GenerateRequest> for GenerationRequest {
    fn from(payload: GenerateRequest) -> Self {
        GenerationRequest::new(payload.mode.unwrap_or_default(), payload.scene)
    }
}

/// Successful generation response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub question: String,
    pub mode: ResolvedMode,
    pub scene: String,
}

impl From<GenerationResult> for GenerateResponse {
    fn from(result: GenerationResult) -> Self {
        Self {
            success: true,
            question: result.content,
            mode: result.mode,
            scene: result.scene,
        }
    }
}

/// Generate a truth question or dare task
pub async fn generate(
    state: web::Data<AppState>,
    payload: web::Json<GenerateRequest>,
) -> Result<HttpResponse, GatewayError> {
    let result = state
        .orchestrator
        .generate(payload.into_inner().into())
        .await
        .inspect_err(|e| {
            if e.status_code().is_server_error() {
                error!(error = %e, "Generation failed");
            }
        })?;

    Ok(HttpResponse::Ok().json(GenerateResponse::from(result)))
}
