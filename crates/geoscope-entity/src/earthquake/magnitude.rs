//! Magnitude scale enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scale a magnitude was measured on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MagnitudeType {
    /// Local (Richter) magnitude, `ML`.
    Richter,
    /// Moment magnitude, `Mw`.
    Moment,
    /// Surface-wave magnitude, `Ms`.
    #[serde(rename = "Surface-wave")]
    SurfaceWave,
    /// Body-wave magnitude, `mb`.
    #[serde(rename = "Body-wave")]
    BodyWave,
    /// Duration magnitude, `Md`.
    Duration,
    /// Not reported or not recognized.
    #[default]
    Unknown,
}

impl MagnitudeType {
    /// Map a seismic network `magType` code (`ml`, `mww`, `mb_lg`, ...).
    ///
    /// Unrecognized codes map to [`MagnitudeType::Unknown`].
    pub fn from_code(code: &str) -> Self {
        let code = code.trim().to_lowercase();
        if code == "ml" || code == "mlg" || code == "mlr" {
            Self::Richter
        } else if code.starts_with("mw") || code == "mi" {
            Self::Moment
        } else if code.starts_with("ms") {
            Self::SurfaceWave
        } else if code.starts_with("mb") {
            Self::BodyWave
        } else if code == "md" || code == "mc" {
            Self::Duration
        } else {
            Self::Unknown
        }
    }

    /// Human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Richter => "Richter",
            Self::Moment => "Moment",
            Self::SurfaceWave => "Surface-wave",
            Self::BodyWave => "Body-wave",
            Self::Duration => "Duration",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for MagnitudeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
