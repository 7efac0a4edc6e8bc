//! Wildfire attributes.

use serde::Serialize;

use super::unit::AreaUnit;

/// Attributes specific to a wildfire.
///
/// `containment_percent` is clamped to `[0, 100]` on construction and on
/// every update; NaN becomes 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WildfireDetails {
    area_burned: f64,
    area_unit: AreaUnit,
    cause: String,
    containment_percent: f64,
    vegetation_type: String,
}

impl WildfireDetails {
    /// Build wildfire attributes.
    pub fn new(
        area_burned: f64,
        area_unit: AreaUnit,
        cause: impl Into<String>,
        containment_percent: f64,
        vegetation_type: impl Into<String>,
    ) -> Self {
        Self {
            area_burned: non_negative(area_burned),
            area_unit,
            cause: cause.into(),
            containment_percent: clamp_containment(containment_percent),
            vegetation_type: vegetation_type.into(),
        }
    }

    /// Burned area in [`Self::area_unit`].
    pub fn area_burned(&self) -> f64 {
        self.area_burned
    }

    /// Unit of the burned area.
    pub fn area_unit(&self) -> AreaUnit {
        self.area_unit
    }

    /// Burned area in hectares.
    pub fn area_hectares(&self) -> f64 {
        self.area_unit.to_hectares(self.area_burned)
    }

    /// Ignition cause.
    pub fn cause(&self) -> &str {
        &self.cause
    }

    /// Containment percentage.
    pub fn containment_percent(&self) -> f64 {
        self.containment_percent
    }

    /// Dominant fuel.
    pub fn vegetation_type(&self) -> &str {
        &self.vegetation_type
    }

    /// Replace the containment, clamped to `[0, 100]`.
    pub fn set_containment_percent(&mut self, percent: f64) {
        self.containment_percent = clamp_containment(percent);
    }
}

fn clamp_containment(percent: f64) -> f64 {
    if percent.is_nan() { 0.0 } else { percent.clamp(0.0, 100.0) }
}

fn non_negative(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.max(0.0) }
}
