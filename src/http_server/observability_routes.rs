//! Observability HTTP Routes
//!
//! Root banner, health check, and model metadata.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use serde_json::json;

use super::quote_routes::ErrorResponse;
use super::state::AppState;
use crate::model::ModelInfo;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub model_loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_error: Option<String>,
    pub started_at: String,
}

/// Create observability routes
pub fn observability_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/model", get(model_handler))
        .with_state(state)
}

/// Root banner
async fn root_handler() -> impl IntoResponse {
    Json(json!({"Message": "Model API"}))
}

/// Health check handler
///
/// Always 200 while the process is up; `model_loaded` tells callers
/// whether predictions will succeed. `status` is `ok`, `loading`, or
/// `unavailable` once the model load has failed.
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let service = &state.service;
    let response = HealthResponse {
        status: service.model_status().as_str().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model_loaded: service.model().is_ready(),
        model_error: service.load_error().map(str::to_string),
        started_at: state.started_at.to_rfc3339(),
    };

    (StatusCode::OK, Json(response))
}

/// Model metadata handler
async fn model_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ModelInfo>, (StatusCode, Json<ErrorResponse>)> {
    state.service.model_info().map(Json).map_err(|e| {
        let status =
            StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(ErrorResponse::from(&e)))
    })
}
