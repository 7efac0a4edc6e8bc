//! Weighted severity formulas.

use geoscope_core::config::SeverityConfig;
use geoscope_core::config::severity::{PiecewiseLinear, SCALE_MAX};
use geoscope_entity::Severity;

use super::inputs::{EarthquakeInputs, VolcanoInputs, WildfireInputs};

/// Scores events on the 0–10 scale.
///
/// Every factor is mapped onto the 0–10 scale before weighting, so a weight
/// table summing to 1 stays on that scale. The result is clamped anyway.
/// Pure: the same inputs always give the same score.
#[derive(Debug, Clone, Default)]
pub struct SeverityCalculator {
    config: SeverityConfig,
}

impl SeverityCalculator {
    /// Create a calculator with the given weights and curves.
    pub fn new(config: SeverityConfig) -> Self {
        Self { config }
    }

    /// `0.5·magnitude + 0.1·inverse_depth + 0.2·population + 0.2·tsunami`
    /// with the default weights.
    pub fn earthquake(&self, inputs: &EarthquakeInputs) -> Severity {
        let weights = &self.config.earthquake;
        let curves = &self.config.curves;

        let tsunami = if inputs.tsunami {
            self.config.tsunami_score
        } else {
            0.0
        };

        Severity::new(
            weights.magnitude * self.factor(&curves.magnitude, Some(inputs.magnitude))
                + weights.depth * self.factor(&curves.inverse_depth, Some(inputs.depth_km))
                + weights.population * self.factor(&curves.population, inputs.population)
                + weights.tsunami * tsunami,
        )
    }

    /// `0.4·vei + 0.2·height + 0.2·population + 0.2·hazard` with the
    /// default weights.
    pub fn volcano(&self, inputs: &VolcanoInputs) -> Severity {
        let weights = &self.config.volcano;
        let curves = &self.config.curves;

        Severity::new(
            weights.vei * self.factor(&curves.vei, Some(f64::from(inputs.vei)))
                + weights.height * self.factor(&curves.eruption_height, inputs.eruption_height_m)
                + weights.population * self.factor(&curves.population, inputs.population)
                + weights.hazard * self.hazard_factor(inputs),
        )
    }

    /// `0.3·area + 0.3·uncontained + 0.2·population + 0.2·spread_rate` with
    /// the default weights.
    pub fn wildfire(&self, inputs: &WildfireInputs) -> Severity {
        let weights = &self.config.wildfire;
        let curves = &self.config.curves;

        let containment = if inputs.containment_percent.is_nan() {
            0.0
        } else {
            inputs.containment_percent.clamp(0.0, 100.0)
        };
        let uncontained = (1.0 - containment / 100.0) * SCALE_MAX;

        Severity::new(
            weights.area * self.factor(&curves.burned_area, Some(inputs.area_hectares))
                + weights.containment * uncontained
                + weights.population * self.factor(&curves.population, inputs.population)
                + weights.spread_rate
                    * self.factor(&curves.spread_rate, inputs.spread_rate_ha_per_hour),
        )
    }

    /// Sum of the points of every reported hazard, capped at the scale max.
    fn hazard_factor(&self, inputs: &VolcanoInputs) -> f64 {
        if !inputs.has_hazard_data() {
            return self.config.neutral_default;
        }
        let points = &self.config.hazard;
        let flagged = |flag: Option<bool>, value: f64| if flag == Some(true) { value } else { 0.0 };

        (flagged(inputs.pyroclastic_flow, points.pyroclastic_flow)
            + flagged(inputs.lahar, points.lahar)
            + flagged(inputs.tsunami, points.tsunami))
        .min(SCALE_MAX)
    }

    fn factor(&self, curve: &PiecewiseLinear, value: Option<f64>) -> f64 {
        match value {
            Some(x) if !x.is_nan() => curve.evaluate(x).clamp(0.0, SCALE_MAX),
            _ => self.config.neutral_default,
        }
    }
}
