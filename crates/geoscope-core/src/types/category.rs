//! Hazard category enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// The hazard feeds Geoscope aggregates. Each category has exactly one
/// source adapter and produces exactly one event variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardCategory {
    /// Earthquakes.
    Earthquakes,
    /// Volcanic eruptions.
    Volcanoes,
    /// Wildfires.
    Wildfires,
}

impl HazardCategory {
    /// Every category, in the order combined responses list them.
    pub const ALL: [HazardCategory; 3] = [Self::Earthquakes, Self::Volcanoes, Self::Wildfires];

    /// Return the category as the lowercase path segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Earthquakes => "earthquakes",
            Self::Volcanoes => "volcanoes",
            Self::Wildfires => "wildfires",
        }
    }

    /// Singular, capitalized name used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Earthquakes => "Earthquake",
            Self::Volcanoes => "Volcano",
            Self::Wildfires => "Wildfire",
        }
    }
}

impl fmt::Display for HazardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HazardCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "earthquakes" | "earthquake" => Ok(Self::Earthquakes),
            "volcanoes" | "volcanos" | "volcano" => Ok(Self::Volcanoes),
            "wildfires" | "wildfire" => Ok(Self::Wildfires),
            _ => Err(AppError::invalid_request(format!(
                "Invalid hazard category: '{s}'. Expected one of: earthquakes, volcanoes, wildfires"
            ))),
        }
    }
}
