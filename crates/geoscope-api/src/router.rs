//! Router for the Geoscope HTTP API.
//!
//! Axum only provides the transport: every request lands on the fallback
//! dispatch handler, which consults the [`RouteTable`](crate::routing::RouteTable)
//! so that unknown paths and wrong methods produce the standard envelope.

use axum::Router;
use axum::middleware as axum_middleware;
use tower_http::trace::TraceLayer;

use crate::handlers::dispatch::dispatch;
use crate::middleware;
use crate::state::AppState;

/// Build the router with request logging and tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .fallback(dispatch)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}
