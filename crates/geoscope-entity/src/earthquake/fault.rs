//! Fault mechanism enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Faulting style of an earthquake.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FaultType {
    /// Horizontal motion along the fault plane.
    StrikeSlip,
    /// Extensional faulting.
    Normal,
    /// Compressional (thrust) faulting.
    Reverse,
    /// Megathrust at a subduction zone.
    Subduction,
    /// Not reported.
    #[default]
    Unknown,
}

impl FaultType {
    /// Lenient parse of a free-text mechanism description.
    pub fn parse_lenient(text: &str) -> Self {
        let text = text.to_lowercase();
        if text.contains("strike") {
            Self::StrikeSlip
        } else if text.contains("subduction") || text.contains("megathrust") {
            Self::Subduction
        } else if text.contains("reverse") || text.contains("thrust") {
            Self::Reverse
        } else if text.contains("normal") {
            Self::Normal
        } else {
            Self::Unknown
        }
    }

    /// Return the fault type as a kebab-case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StrikeSlip => "strike-slip",
            Self::Normal => "normal",
            Self::Reverse => "reverse",
            Self::Subduction => "subduction",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FaultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lenient() {
        assert_eq!(FaultType::parse_lenient("Strike-Slip"), FaultType::StrikeSlip);
        assert_eq!(FaultType::parse_lenient("megathrust"), FaultType::Subduction);
        assert_eq!(FaultType::parse_lenient("thrust"), FaultType::Reverse);
        assert_eq!(FaultType::parse_lenient(""), FaultType::Unknown);
    }
}
