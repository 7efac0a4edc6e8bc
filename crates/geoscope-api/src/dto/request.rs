//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use geoscope_core::error::AppError;
use geoscope_core::result::AppResult;
use geoscope_core::types::{DEFAULT_MIN_MAGNITUDE, FetchParams, Period};

/// Query string of the event endpoints. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EventQuery {
    /// `hour`, `day`, `week` or `month`, any case.
    pub period: Option<String>,
    /// Minimum earthquake magnitude.
    #[validate(range(min = 0.0, max = 10.0, message = "minMagnitude must lie within 0..=10"))]
    pub min_magnitude: Option<f64>,
}

impl EventQuery {
    /// Validate and convert into adapter parameters, applying defaults.
    pub fn into_params(self) -> AppResult<FetchParams> {
        self.validate()
            .map_err(|e| AppError::invalid_request(format!("Invalid query: {e}")))?;

        let period = match self.period.as_deref().map(str::trim) {
            None | Some("") => Period::default(),
            Some(raw) => raw.parse::<Period>()?,
        };
        FetchParams::new(period, self.min_magnitude.unwrap_or(DEFAULT_MIN_MAGNITUDE))
    }
}
