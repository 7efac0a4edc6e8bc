//! Earthquake attributes.

use serde::Serialize;

use super::fault::FaultType;
use super::magnitude::MagnitudeType;

/// Attributes specific to an earthquake.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EarthquakeDetails {
    magnitude: f64,
    magnitude_type: MagnitudeType,
    /// Hypocenter depth in km, never negative.
    depth: f64,
    fault_type: FaultType,
    tsunami_generated: bool,
}

impl EarthquakeDetails {
    /// Build earthquake attributes. Negative depths clamp to zero.
    pub fn new(
        magnitude: f64,
        magnitude_type: MagnitudeType,
        depth: f64,
        fault_type: FaultType,
        tsunami_generated: bool,
    ) -> Self {
        Self {
            magnitude,
            magnitude_type,
            depth: non_negative(depth),
            fault_type,
            tsunami_generated,
        }
    }

    /// Magnitude.
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Magnitude scale.
    pub fn magnitude_type(&self) -> MagnitudeType {
        self.magnitude_type
    }

    /// Depth in km.
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Faulting style.
    pub fn fault_type(&self) -> FaultType {
        self.fault_type
    }

    /// Whether a tsunami was generated.
    pub fn tsunami_generated(&self) -> bool {
        self.tsunami_generated
    }

    /// Replace the magnitude and its scale.
    pub fn set_magnitude(&mut self, magnitude: f64, magnitude_type: MagnitudeType) {
        self.magnitude = magnitude;
        self.magnitude_type = magnitude_type;
    }

    /// Replace the depth. Negative values clamp to zero.
    pub fn set_depth(&mut self, depth: f64) {
        self.depth = non_negative(depth);
    }

    /// Replace the faulting style.
    pub fn set_fault_type(&mut self, fault_type: FaultType) {
        self.fault_type = fault_type;
    }

    /// Record whether a tsunami was generated.
    pub fn set_tsunami_generated(&mut self, generated: bool) {
        self.tsunami_generated = generated;
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.max(0.0) }
}
