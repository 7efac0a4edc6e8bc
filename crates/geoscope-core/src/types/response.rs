//! The uniform response envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::warning::Warning;

/// Message used for every successful response.
pub const SUCCESS_MESSAGE: &str = "Success";

/// Shape shared by every API response, success or failure.
///
/// `warnings` is only serialized when it has entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
    /// Response data; `null` on failure.
    pub data: Option<T>,
    /// Instant the envelope was built.
    pub timestamp: DateTime<Utc>,
    /// Non-fatal problems encountered while building `data`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<Warning>,
}

impl<T> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self::ok_with_warnings(data, Vec::new())
    }

    /// Creates a successful response carrying warnings.
    pub fn ok_with_warnings(data: T, warnings: Vec<Warning>) -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
            data: Some(data),
            timestamp: Utc::now(),
            warnings,
        }
    }

    /// Creates a failed response with `data: null`.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            timestamp: Utc::now(),
            warnings: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HazardCategory;

    #[test]
    fn test_failure_serializes_null_data() {
        let body = ApiResponse::<()>::failure("Route not found");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert!(json["data"].is_null());
        assert!(json.get("timestamp").is_some());
        assert!(json.get("warnings").is_none());
    }

    #[test]
    fn test_warnings_serialized_when_present() {
        let warnings = vec![Warning::records_skipped(HazardCategory::Earthquakes, 1)];
        let body = ApiResponse::ok_with_warnings(vec![1, 2, 3], warnings);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Success");
        assert_eq!(json["warnings"].as_array().unwrap().len(), 1);
    }
}
