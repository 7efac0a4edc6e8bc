//! Volcano attributes.

use serde::Serialize;

use super::kind::VolcanoType;

/// Highest value on the Volcanic Explosivity Index.
pub const VEI_MAX: u8 = 8;

/// Attributes specific to a volcanic eruption.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolcanoDetails {
    volcano_type: VolcanoType,
    /// Volcanic Explosivity Index, 0–8.
    vei: u8,
    /// Silica content of the magma in percent, 0–100.
    magma_composition: f64,
    /// Eruption column height in meters.
    eruption_height: f64,
    tsunami_generated: bool,
}

impl VolcanoDetails {
    /// Build volcano attributes, clamping every bounded field.
    pub fn new(
        volcano_type: VolcanoType,
        vei: u8,
        magma_composition: f64,
        eruption_height: f64,
        tsunami_generated: bool,
    ) -> Self {
        Self {
            volcano_type,
            vei: vei.min(VEI_MAX),
            magma_composition: clamp_percent(magma_composition),
            eruption_height: if eruption_height.is_nan() { 0.0 } else { eruption_height.max(0.0) },
            tsunami_generated,
        }
    }

    /// Morphological class.
    pub fn volcano_type(&self) -> VolcanoType {
        self.volcano_type
    }

    /// VEI.
    pub fn vei(&self) -> u8 {
        self.vei
    }

    /// Magma silica percentage.
    pub fn magma_composition(&self) -> f64 {
        self.magma_composition
    }

    /// Column height in meters.
    pub fn eruption_height(&self) -> f64 {
        self.eruption_height
    }

    /// Whether the eruption generated a tsunami.
    pub fn tsunami_generated(&self) -> bool {
        self.tsunami_generated
    }
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 100.0) }
}
