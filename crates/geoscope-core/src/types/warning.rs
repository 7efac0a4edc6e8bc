//! Non-fatal problems reported alongside a successful response.

use serde::{Deserialize, Serialize};

use super::category::HazardCategory;
use crate::error::{AppError, ErrorKind};

/// Machine-readable warning code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningCode {
    /// The feed could not be reached or answered with an error status.
    SourceUnavailable,
    /// The feed answered with an unexpected body.
    SourceMalformed,
    /// The feed did not answer before the request deadline.
    SourceTimeout,
    /// Some records lacked required fields and were left out.
    RecordsSkipped,
}

/// A problem with one category that did not fail the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warning {
    /// Category the warning is about.
    pub category: HazardCategory,
    /// Machine-readable code.
    pub code: WarningCode,
    /// Human-readable message.
    pub message: String,
    /// Number of records left out, for [`WarningCode::RecordsSkipped`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skipped: Option<usize>,
}

impl Warning {
    /// Describe a failed source adapter call.
    pub fn source_failure(category: HazardCategory, error: &AppError) -> Self {
        let code = match error.kind {
            ErrorKind::SourceMalformed => WarningCode::SourceMalformed,
            _ => WarningCode::SourceUnavailable,
        };
        Self {
            category,
            code,
            message: error.message.clone(),
            skipped: None,
        }
    }

    /// Describe an adapter call that ran past the deadline.
    pub fn timeout(category: HazardCategory, seconds: u64) -> Self {
        Self {
            category,
            code: WarningCode::SourceTimeout,
            message: format!(
                "{} feed did not respond within {seconds}s",
                category.label()
            ),
            skipped: None,
        }
    }

    /// Describe records skipped by the event factory.
    pub fn records_skipped(category: HazardCategory, skipped: usize) -> Self {
        Self {
            category,
            code: WarningCode::RecordsSkipped,
            message: format!(
                "{skipped} {} record(s) skipped due to missing fields",
                category.label().to_lowercase()
            ),
            skipped: Some(skipped),
        }
    }
}
