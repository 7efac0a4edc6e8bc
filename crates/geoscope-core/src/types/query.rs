//! Source adapter parameters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Minimum magnitude used when the caller does not pass one.
pub const DEFAULT_MIN_MAGNITUDE: f64 = 2.5;

/// Look-back window of a feed request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Past hour.
    Hour,
    /// Past day.
    #[default]
    Day,
    /// Past seven days.
    Week,
    /// Past thirty days.
    Month,
}

impl Period {
    /// Return the period as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// Whole days covering the period, for feeds that only accept days.
    pub fn as_days(&self) -> u32 {
        match self {
            Self::Hour | Self::Day => 1,
            Self::Week => 7,
            Self::Month => 30,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Period {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hour" => Ok(Self::Hour),
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            _ => Err(AppError::invalid_request(format!(
                "Invalid period: '{s}'. Expected one of: hour, day, week, month"
            ))),
        }
    }
}

/// Parameters handed to every source adapter.
///
/// Adapters ignore the fields that do not apply to their feed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchParams {
    /// Look-back window.
    pub period: Period,
    /// Smallest earthquake magnitude to return.
    pub min_magnitude: f64,
}

impl FetchParams {
    /// Build validated parameters.
    pub fn new(period: Period, min_magnitude: f64) -> Result<Self, AppError> {
        if !min_magnitude.is_finite() || !(0.0..=10.0).contains(&min_magnitude) {
            return Err(AppError::invalid_request(format!(
                "Invalid minMagnitude: {min_magnitude}. Expected a number between 0 and 10"
            )));
        }
        Ok(Self {
            period,
            min_magnitude,
        })
    }
}

impl Default for FetchParams {
    fn default() -> Self {
        Self {
            period: Period::Day,
            min_magnitude: DEFAULT_MIN_MAGNITUDE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_parse_is_case_insensitive() {
        assert_eq!("WEEK".parse::<Period>().unwrap(), Period::Week);
        assert!("year".parse::<Period>().is_err());
    }

    #[test]
    fn test_defaults() {
        let params = FetchParams::default();
        assert_eq!(params.period, Period::Day);
        assert_eq!(params.min_magnitude, 2.5);
    }

    #[test]
    fn test_rejects_out_of_range_magnitude() {
        assert!(FetchParams::new(Period::Day, 11.0).is_err());
        assert!(FetchParams::new(Period::Day, -0.5).is_err());
        assert!(FetchParams::new(Period::Day, f64::NAN).is_err());
        assert!(FetchParams::new(Period::Hour, 4.5).is_ok());
    }
}
