//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use geoscope_core::config::AppConfig;
use geoscope_service::AggregationService;

use crate::routing::RouteTable;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Feed aggregation service
    pub aggregation: Arc<AggregationService>,
    /// Request routing table
    pub routes: Arc<RouteTable>,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Creates state around an already-built aggregation service.
    pub fn new(config: AppConfig, aggregation: AggregationService) -> Self {
        Self {
            config: Arc::new(config),
            aggregation: Arc::new(aggregation),
            routes: Arc::new(RouteTable::standard()),
            started_at: Instant::now(),
        }
    }
}
