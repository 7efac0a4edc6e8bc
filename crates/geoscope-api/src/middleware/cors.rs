//! CORS layer configuration.

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use geoscope_core::config::CorsConfig;

/// Builds a CORS tower layer from configuration.
///
/// Unparseable origins, methods and headers are dropped with a warning.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new();

    if config.allowed_origins.iter().any(|o| o == "*") {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| parse_or_warn(o, "origin"))
            .collect();
        layer = layer.allow_origin(origins);
    }

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| parse_or_warn(m, "method"))
        .collect();
    layer = layer.allow_methods(methods);

    if config.allowed_headers.iter().any(|h| h == "*") {
        layer = layer.allow_headers(Any);
    } else {
        let headers: Vec<HeaderName> = config
            .allowed_headers
            .iter()
            .filter_map(|h| parse_or_warn(h, "header"))
            .collect();
        layer = layer.allow_headers(headers);
    }

    layer.max_age(Duration::from_secs(config.max_age_seconds))
}

fn parse_or_warn<T: std::str::FromStr>(raw: &str, what: &str) -> Option<T> {
    let parsed = raw.parse().ok();
    if parsed.is_none() {
        tracing::warn!(value = raw, kind = what, "Ignoring invalid CORS entry");
    }
    parsed
}
