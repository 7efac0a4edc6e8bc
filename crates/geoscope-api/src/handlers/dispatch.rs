//! Single entry point for every request.

use axum::extract::{Query, State};
use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Response};

use geoscope_core::error::AppError;

use crate::dto::EventQuery;
use crate::error::ApiError;
use crate::handlers::{events, health};
use crate::routing::Route;
use crate::state::AppState;

/// Resolve the request against the routing table and run the matching
/// handler. Routing failures return before any feed is contacted.
pub async fn dispatch(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    match handle(&state, &method, &uri).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

async fn handle(state: &AppState, method: &Method, uri: &Uri) -> Result<Response, ApiError> {
    let route = state.routes.resolve(method, uri.path())?;

    match route {
        Route::Health => Ok(health::health(state).into_response()),
        Route::Category(category) => {
            let params = event_query(uri)?.into_params()?;
            events::category_events(state, category, &params).await
        }
        Route::Combined => {
            let params = event_query(uri)?.into_params()?;
            events::combined_events(state, &params).await
        }
    }
}

fn event_query(uri: &Uri) -> Result<EventQuery, AppError> {
    Query::<EventQuery>::try_from_uri(uri)
        .map(|Query(query)| query)
        .map_err(|e| AppError::invalid_request(format!("Invalid query string: {e}")))
}
