//! Core type definitions used across the Geoscope workspace.

pub mod category;
pub mod query;
pub mod raw;
pub mod response;
pub mod warning;

pub use category::HazardCategory;
pub use query::{DEFAULT_MIN_MAGNITUDE, FetchParams, Period};
pub use raw::{GeoPoint, RawRecord};
pub use response::ApiResponse;
pub use warning::{Warning, WarningCode};
