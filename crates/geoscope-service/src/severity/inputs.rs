//! Raw attributes consumed by the severity formulas.
//!
//! `None` means the feed did not report the value; the calculator then uses
//! the configured neutral factor.

/// Earthquake formula inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EarthquakeInputs {
    /// Magnitude.
    pub magnitude: f64,
    /// Hypocenter depth in km.
    pub depth_km: f64,
    /// Whether a tsunami was generated.
    pub tsunami: bool,
    /// Exposed population.
    pub population: Option<f64>,
}

/// Volcano formula inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VolcanoInputs {
    /// Volcanic Explosivity Index.
    pub vei: u8,
    /// Eruption column height in meters.
    pub eruption_height_m: Option<f64>,
    /// Exposed population.
    pub population: Option<f64>,
    /// Pyroclastic flows reported.
    pub pyroclastic_flow: Option<bool>,
    /// Lahars reported.
    pub lahar: Option<bool>,
    /// Eruption generated a tsunami.
    pub tsunami: Option<bool>,
}

impl VolcanoInputs {
    /// Whether any secondary-hazard flag was reported.
    pub fn has_hazard_data(&self) -> bool {
        self.pyroclastic_flow.is_some() || self.lahar.is_some() || self.tsunami.is_some()
    }
}

/// Wildfire formula inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WildfireInputs {
    /// Burned area in hectares.
    pub area_hectares: f64,
    /// Containment percentage, 0–100.
    pub containment_percent: f64,
    /// Exposed population.
    pub population: Option<f64>,
    /// Spread rate in hectares per hour.
    pub spread_rate_ha_per_hour: Option<f64>,
}
