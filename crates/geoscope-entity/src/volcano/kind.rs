//! Volcano morphology enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Morphological class of a volcano.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VolcanoType {
    /// Broad, gently sloping basaltic edifice.
    Shield,
    /// Steep composite cone.
    Stratovolcano,
    /// Collapse depression.
    Caldera,
    /// Small scoria cone.
    CinderCone,
    /// Viscous lava dome.
    LavaDome,
    /// Fissure vent.
    Fissure,
    /// Submarine vent.
    Submarine,
    /// Not reported.
    #[default]
    Unknown,
}

impl VolcanoType {
    /// Lenient parse of a free-text description such as an event title.
    pub fn parse_lenient(text: &str) -> Self {
        let text = text.to_lowercase();
        if text.contains("shield") {
            Self::Shield
        } else if text.contains("strato") || text.contains("composite") {
            Self::Stratovolcano
        } else if text.contains("caldera") {
            Self::Caldera
        } else if text.contains("cinder") || text.contains("scoria") {
            Self::CinderCone
        } else if text.contains("dome") {
            Self::LavaDome
        } else if text.contains("fissure") {
            Self::Fissure
        } else if text.contains("submarine") || text.contains("seamount") {
            Self::Submarine
        } else {
            Self::Unknown
        }
    }

    /// Return the volcano type as a kebab-case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shield => "shield",
            Self::Stratovolcano => "stratovolcano",
            Self::Caldera => "caldera",
            Self::CinderCone => "cinder-cone",
            Self::LavaDome => "lava-dome",
            Self::Fissure => "fissure",
            Self::Submarine => "submarine",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for VolcanoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
