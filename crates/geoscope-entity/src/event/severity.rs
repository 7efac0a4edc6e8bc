//! Severity score value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A severity score on the closed 0–10 scale.
///
/// Construction clamps out-of-range values and maps NaN to zero, so every
/// `Severity` in circulation satisfies `0 <= score <= 10`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Severity(f64);

impl Severity {
    /// Lowest possible score.
    pub const MIN: Severity = Severity(0.0);
    /// Highest possible score.
    pub const MAX: Severity = Severity(10.0);

    /// Clamp `score` onto the 0–10 scale.
    pub fn new(score: f64) -> Self {
        if score.is_nan() {
            return Self::MIN;
        }
        Self(score.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// The score.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Severity {
    fn from(score: f64) -> Self {
        Self::new(score)
    }
}

impl From<Severity> for f64 {
    fn from(severity: Severity) -> Self {
        severity.0
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
