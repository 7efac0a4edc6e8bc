//! Health check handler.

use axum::Json;

use geoscope_core::types::ApiResponse;

use crate::dto::HealthResponse;
use crate::state::AppState;

/// GET /api/health
pub fn health(state: &AppState) -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    }))
}
