//! Application builder: wires router, middleware, and state into an Axum app.

use std::sync::Arc;

use axum::Router;

use geoscope_core::config::AppConfig;
use geoscope_core::config::app::CorsConfig;
use geoscope_core::error::AppError;
use geoscope_feeds::FeedRegistry;
use geoscope_service::{AggregationService, EventFactory, IdSequence, SeverityCalculator};

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState, cors_config: &CorsConfig) -> Router {
    build_router(state).layer(build_cors_layer(cors_config))
}

/// Builds the production state: real feed adapters, a fresh id sequence,
/// and the configured severity policy.
pub fn build_state(config: AppConfig) -> Result<AppState, AppError> {
    let registry = FeedRegistry::from_config(&config.feeds)?;
    let factory = EventFactory::new(
        Arc::new(SeverityCalculator::new(config.severity.clone())),
        Arc::new(IdSequence::new()),
    );
    let aggregation = AggregationService::new(registry, factory, &config.feeds);
    Ok(AppState::new(config, aggregation))
}

/// Runs the Geoscope server until Ctrl-C.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Geoscope server...");

    let cors = config.server.cors.clone();
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = build_app(build_state(config)?, &cors);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Geoscope server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Geoscope server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
