//! Hazard event handlers.

use axum::Json;
use axum::response::{IntoResponse, Response};

use geoscope_core::types::{ApiResponse, FetchParams, HazardCategory};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/events/{earthquakes|volcanoes|wildfires}
pub async fn category_events(
    state: &AppState,
    category: HazardCategory,
    params: &FetchParams,
) -> Result<Response, ApiError> {
    let result = state.aggregation.get_by_category(category, params).await?;
    tracing::debug!(category = %category, events = result.events.len(), "Category request served");

    Ok(Json(ApiResponse::ok_with_warnings(result.events, result.warnings)).into_response())
}

/// GET /api/events
pub async fn combined_events(state: &AppState, params: &FetchParams) -> Result<Response, ApiError> {
    let combined = state.aggregation.get_all(params).await?;
    Ok(Json(ApiResponse::ok_with_warnings(combined.data, combined.warnings)).into_response())
}
