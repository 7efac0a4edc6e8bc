//! # geoscope-api
//!
//! HTTP API layer for Geoscope built on Axum.
//!
//! Every request goes through one dispatch handler: the [`RouteTable`]
//! resolves `(method, path)` to a route or to a 404/405, and the
//! [`ApiError`] classifier turns every failure into the standard envelope.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routing;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use routing::{Route, RouteTable};
pub use state::AppState;
