use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;

/// Request body for the operator dispatch probe
#[derive(Debug, Deserialize)]
pub struct DispatchRequest {
    pub command: Option<String>,
}

/// Response from the dispatch probe
#[derive(Debug, Serialize)]
pub struct DispatchResponse {
    pub dispatched: String,
    pub status: &'static str,
}

/// Dispatch a command
///
/// POST /api/dispatch
pub async fn dispatch(
    Json(req): Json<DispatchRequest>,
) -> Result<Json<DispatchResponse>, ApiError> {
    let command = req.command.unwrap_or_else(|| "noop".to_string());
    tracing::info!(%command, "dispatch requested");

    Ok(Json(DispatchResponse {
        dispatched: command,
        status: "ok",
    }))
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
