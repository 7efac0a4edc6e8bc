//! The request routing table.
//!
//! Pure and deterministic: a `(method, path)` pair resolves to a [`Route`],
//! to `RouteNotFound` when no resource has that path, or to
//! `MethodNotAllowed` when the path is known but the method is not served.
//! Paths are matched case-insensitively and trailing slashes are ignored.

use axum::http::Method;

use geoscope_core::error::AppError;
use geoscope_core::result::AppResult;
use geoscope_core::types::HazardCategory;

/// A resolved API resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Events of one category.
    Category(HazardCategory),
    /// Events of every category.
    Combined,
    /// Service liveness.
    Health,
}

/// One table row.
#[derive(Debug, Clone)]
struct RouteEntry {
    path: &'static str,
    method: Method,
    route: Route,
}

/// Maps normalized paths and methods to routes.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// The Geoscope API.
    pub fn standard() -> Self {
        let get = |path, route| RouteEntry {
            path,
            method: Method::GET,
            route,
        };

        Self {
            entries: vec![
                get("/api/events/earthquakes", Route::Category(HazardCategory::Earthquakes)),
                get("/api/events/volcanoes", Route::Category(HazardCategory::Volcanoes)),
                get("/api/events/volcanos", Route::Category(HazardCategory::Volcanoes)),
                get("/api/events/wildfires", Route::Category(HazardCategory::Wildfires)),
                get("/api/events", Route::Combined),
                get("/api/events/all", Route::Combined),
                get("/api/health", Route::Health),
            ],
        }
    }

    /// Resolve a request line.
    pub fn resolve(&self, method: &Method, path: &str) -> AppResult<Route> {
        let normalized = normalize_path(path);
        let mut path_known = false;

        for entry in self.entries.iter().filter(|e| e.path == normalized) {
            if entry.method == *method {
                return Ok(entry.route);
            }
            path_known = true;
        }

        if path_known {
            Err(AppError::method_not_allowed(format!(
                "Method {method} is not allowed on {normalized}"
            )))
        } else {
            Err(AppError::route_not_found(format!(
                "No resource matches {normalized}"
            )))
        }
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Lowercase `path` and strip trailing slashes. The root stays `/`.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_lowercase()
    }
}
