//! Burned-area unit enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use geoscope_core::AppError;

/// Unit a burned area is reported in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaUnit {
    /// Acres.
    #[default]
    #[serde(rename = "acres")]
    Acres,
    /// Hectares.
    #[serde(rename = "hectares")]
    Hectares,
    /// Square kilometers.
    #[serde(rename = "km²")]
    SquareKilometers,
}

impl AreaUnit {
    const HECTARES_PER_ACRE: f64 = 0.404_685_642_24;

    /// Convert `area` in this unit to hectares.
    pub fn to_hectares(&self, area: f64) -> f64 {
        match self {
            Self::Acres => area * Self::HECTARES_PER_ACRE,
            Self::Hectares => area,
            Self::SquareKilometers => area * 100.0,
        }
    }

    /// Return the unit label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Acres => "acres",
            Self::Hectares => "hectares",
            Self::SquareKilometers => "km²",
        }
    }
}

impl fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AreaUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "acres" | "acre" | "ac" => Ok(Self::Acres),
            "hectares" | "hectare" | "ha" => Ok(Self::Hectares),
            "km²" | "km2" | "sq km" | "square kilometers" => Ok(Self::SquareKilometers),
            _ => Err(AppError::invalid_request(format!(
                "Invalid area unit: '{s}'. Expected one of: acres, hectares, km²"
            ))),
        }
    }
}
