//! Severity scoring configuration.
//!
//! Holds the weight table of every variant formula and the curves that map a
//! raw attribute (magnitude, depth, burned area, ...) onto the 0–10 factor
//! scale. The defaults reproduce the published scoring policy; every value
//! can be overridden from the `[severity]` configuration section.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// Upper bound of every factor and of the final score.
pub const SCALE_MAX: f64 = 10.0;

/// A monotonic piecewise-linear mapping from a raw value to a factor.
///
/// Inputs below the first breakpoint take the first output, inputs above the
/// last breakpoint take the last output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PiecewiseLinear {
    points: Vec<(f64, f64)>,
}

impl PiecewiseLinear {
    /// Build a curve from `(input, output)` breakpoints.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// The breakpoints of this curve.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Evaluate the curve at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return 0.0;
        };
        if x <= first.0 {
            return first.1;
        }
        if x >= last.0 {
            return last.1;
        }

        for pair in self.points.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            if x <= x1 {
                let t = (x - x0) / (x1 - x0);
                return y0 + t * (y1 - y0);
            }
        }
        last.1
    }

    /// Check that the curve is well formed: at least one breakpoint, finite
    /// values, strictly increasing inputs, outputs inside the factor scale,
    /// and outputs moving in a single direction.
    pub fn validate(&self, name: &str) -> AppResult<()> {
        if self.points.is_empty() {
            return Err(AppError::configuration(format!(
                "Severity curve '{name}' needs at least one breakpoint"
            )));
        }

        for &(x, y) in &self.points {
            if !x.is_finite() || !y.is_finite() {
                return Err(AppError::configuration(format!(
                    "Severity curve '{name}' contains a non-finite breakpoint"
                )));
            }
            if !(0.0..=SCALE_MAX).contains(&y) {
                return Err(AppError::configuration(format!(
                    "Severity curve '{name}' output {y} is outside 0..={SCALE_MAX}"
                )));
            }
        }

        let mut rising = false;
        let mut falling = false;
        for pair in self.points.windows(2) {
            if pair[1].0 <= pair[0].0 {
                return Err(AppError::configuration(format!(
                    "Severity curve '{name}' inputs must be strictly increasing"
                )));
            }
            rising |= pair[1].1 > pair[0].1;
            falling |= pair[1].1 < pair[0].1;
        }
        if rising && falling {
            return Err(AppError::configuration(format!(
                "Severity curve '{name}' must be monotonic"
            )));
        }

        Ok(())
    }
}

/// Weights of the earthquake formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthquakeWeights {
    /// Weight of the normalized magnitude.
    #[serde(default = "weight_half")]
    pub magnitude: f64,
    /// Weight of the inverse-depth factor.
    #[serde(default = "weight_tenth")]
    pub depth: f64,
    /// Weight of the exposed-population factor.
    #[serde(default = "weight_fifth")]
    pub population: f64,
    /// Weight of the tsunami factor.
    #[serde(default = "weight_fifth")]
    pub tsunami: f64,
}

impl Default for EarthquakeWeights {
    fn default() -> Self {
        Self {
            magnitude: 0.5,
            depth: 0.1,
            population: 0.2,
            tsunami: 0.2,
        }
    }
}

/// Weights of the volcano formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolcanoWeights {
    /// Weight of the normalized VEI.
    #[serde(default = "weight_two_fifths")]
    pub vei: f64,
    /// Weight of the eruption-column height factor.
    #[serde(default = "weight_fifth")]
    pub height: f64,
    /// Weight of the exposed-population factor.
    #[serde(default = "weight_fifth")]
    pub population: f64,
    /// Weight of the secondary-hazard factor.
    #[serde(default = "weight_fifth")]
    pub hazard: f64,
}

impl Default for VolcanoWeights {
    fn default() -> Self {
        Self {
            vei: 0.4,
            height: 0.2,
            population: 0.2,
            hazard: 0.2,
        }
    }
}

/// Weights of the wildfire formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WildfireWeights {
    /// Weight of the burned-area factor.
    #[serde(default = "weight_three_tenths")]
    pub area: f64,
    /// Weight of the uncontained-share term.
    #[serde(default = "weight_three_tenths")]
    pub containment: f64,
    /// Weight of the exposed-population factor.
    #[serde(default = "weight_fifth")]
    pub population: f64,
    /// Weight of the spread-rate factor.
    #[serde(default = "weight_fifth")]
    pub spread_rate: f64,
}

impl Default for WildfireWeights {
    fn default() -> Self {
        Self {
            area: 0.3,
            containment: 0.3,
            population: 0.2,
            spread_rate: 0.2,
        }
    }
}

/// Raw-value → factor curves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorCurves {
    /// Magnitude → `magnitude_norm`. Moderate (5.0) lands on 5, extreme (8.0+) on 10.
    #[serde(default = "magnitude_curve")]
    pub magnitude: PiecewiseLinear,
    /// Hypocenter depth in km → `inverse_depth`. Shallow events score higher.
    #[serde(default = "inverse_depth_curve")]
    pub inverse_depth: PiecewiseLinear,
    /// VEI → `vei_norm`. VEI 7 and above is catastrophic.
    #[serde(default = "vei_curve")]
    pub vei: PiecewiseLinear,
    /// Eruption column height in meters → `height_factor`.
    #[serde(default = "eruption_height_curve")]
    pub eruption_height: PiecewiseLinear,
    /// Burned area in hectares → `area_factor`.
    #[serde(default = "burned_area_curve")]
    pub burned_area: PiecewiseLinear,
    /// Exposed population (people) → `population_factor`.
    #[serde(default = "population_curve")]
    pub population: PiecewiseLinear,
    /// Fire spread rate in hectares per hour → `spread_rate_factor`.
    #[serde(default = "spread_rate_curve")]
    pub spread_rate: PiecewiseLinear,
}

impl Default for FactorCurves {
    fn default() -> Self {
        Self {
            magnitude: magnitude_curve(),
            inverse_depth: inverse_depth_curve(),
            vei: vei_curve(),
            eruption_height: eruption_height_curve(),
            burned_area: burned_area_curve(),
            population: population_curve(),
            spread_rate: spread_rate_curve(),
        }
    }
}

/// Points contributed to the volcano `hazard_factor` by each known flag.
/// The sum is capped at [`SCALE_MAX`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardPoints {
    /// Pyroclastic flows reported.
    #[serde(default = "pyroclastic_points")]
    pub pyroclastic_flow: f64,
    /// Lahars reported.
    #[serde(default = "lahar_points")]
    pub lahar: f64,
    /// Eruption generated a tsunami.
    #[serde(default = "volcanic_tsunami_points")]
    pub tsunami: f64,
}

impl Default for HazardPoints {
    fn default() -> Self {
        Self {
            pyroclastic_flow: pyroclastic_points(),
            lahar: lahar_points(),
            tsunami: volcanic_tsunami_points(),
        }
    }
}

/// Complete severity configuration injected into the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityConfig {
    /// Earthquake weight table.
    #[serde(default)]
    pub earthquake: EarthquakeWeights,
    /// Volcano weight table.
    #[serde(default)]
    pub volcano: VolcanoWeights,
    /// Wildfire weight table.
    #[serde(default)]
    pub wildfire: WildfireWeights,
    /// Factor curves.
    #[serde(default)]
    pub curves: FactorCurves,
    /// Volcano hazard flag points.
    #[serde(default)]
    pub hazard: HazardPoints,
    /// Earthquake `tsunami_factor` when a tsunami was generated.
    #[serde(default = "tsunami_score")]
    pub tsunami_score: f64,
    /// Factor used when the feed does not supply the underlying data.
    #[serde(default)]
    pub neutral_default: f64,
}

impl Default for SeverityConfig {
    fn default() -> Self {
        Self {
            earthquake: EarthquakeWeights::default(),
            volcano: VolcanoWeights::default(),
            wildfire: WildfireWeights::default(),
            curves: FactorCurves::default(),
            hazard: HazardPoints::default(),
            tsunami_score: tsunami_score(),
            neutral_default: 0.0,
        }
    }
}

impl SeverityConfig {
    /// Reject negative weights, malformed curves, and factor constants
    /// outside the 0–10 scale.
    pub fn validate(&self) -> AppResult<()> {
        let weights = [
            ("earthquake.magnitude", self.earthquake.magnitude),
            ("earthquake.depth", self.earthquake.depth),
            ("earthquake.population", self.earthquake.population),
            ("earthquake.tsunami", self.earthquake.tsunami),
            ("volcano.vei", self.volcano.vei),
            ("volcano.height", self.volcano.height),
            ("volcano.population", self.volcano.population),
            ("volcano.hazard", self.volcano.hazard),
            ("wildfire.area", self.wildfire.area),
            ("wildfire.containment", self.wildfire.containment),
            ("wildfire.population", self.wildfire.population),
            ("wildfire.spread_rate", self.wildfire.spread_rate),
        ];
        for (name, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(AppError::configuration(format!(
                    "Severity weight '{name}' must be a non-negative number"
                )));
            }
        }

        let constants = [
            ("tsunami_score", self.tsunami_score),
            ("neutral_default", self.neutral_default),
            ("hazard.pyroclastic_flow", self.hazard.pyroclastic_flow),
            ("hazard.lahar", self.hazard.lahar),
            ("hazard.tsunami", self.hazard.tsunami),
        ];
        for (name, value) in constants {
            if !(0.0..=SCALE_MAX).contains(&value) {
                return Err(AppError::configuration(format!(
                    "Severity constant '{name}' must lie within 0..={SCALE_MAX}"
                )));
            }
        }

        let curves = &self.curves;
        curves.magnitude.validate("magnitude")?;
        curves.inverse_depth.validate("inverse_depth")?;
        curves.vei.validate("vei")?;
        curves.eruption_height.validate("eruption_height")?;
        curves.burned_area.validate("burned_area")?;
        curves.population.validate("population")?;
        curves.spread_rate.validate("spread_rate")?;
        Ok(())
    }
}

fn weight_tenth() -> f64 {
    0.1
}

fn weight_fifth() -> f64 {
    0.2
}

fn weight_three_tenths() -> f64 {
    0.3
}

fn weight_two_fifths() -> f64 {
    0.4
}

fn weight_half() -> f64 {
    0.5
}

fn tsunami_score() -> f64 {
    10.0
}

fn pyroclastic_points() -> f64 {
    5.0
}

fn lahar_points() -> f64 {
    3.0
}

fn volcanic_tsunami_points() -> f64 {
    2.0
}

fn magnitude_curve() -> PiecewiseLinear {
    PiecewiseLinear::new(vec![
        (0.0, 0.0),
        (2.5, 1.5),
        (5.0, 5.0),
        (7.0, 8.0),
        (8.0, 10.0),
    ])
}

fn inverse_depth_curve() -> PiecewiseLinear {
    PiecewiseLinear::new(vec![
        (0.0, 10.0),
        (10.0, 10.0),
        (70.0, 6.0),
        (300.0, 2.0),
        (700.0, 0.0),
    ])
}

fn vei_curve() -> PiecewiseLinear {
    PiecewiseLinear::new(vec![
        (0.0, 0.0),
        (2.0, 3.0),
        (4.0, 6.0),
        (6.0, 9.0),
        (7.0, 10.0),
    ])
}

fn eruption_height_curve() -> PiecewiseLinear {
    PiecewiseLinear::new(vec![
        (0.0, 0.0),
        (1_000.0, 2.0),
        (5_000.0, 5.0),
        (15_000.0, 8.0),
        (25_000.0, 10.0),
    ])
}

fn burned_area_curve() -> PiecewiseLinear {
    PiecewiseLinear::new(vec![
        (0.0, 0.0),
        (100.0, 2.0),
        (1_000.0, 4.0),
        (10_000.0, 6.0),
        (100_000.0, 8.0),
        (400_000.0, 10.0),
    ])
}

fn population_curve() -> PiecewiseLinear {
    PiecewiseLinear::new(vec![
        (0.0, 0.0),
        (1_000.0, 2.0),
        (100_000.0, 6.0),
        (1_000_000.0, 8.0),
        (10_000_000.0, 10.0),
    ])
}

fn spread_rate_curve() -> PiecewiseLinear {
    PiecewiseLinear::new(vec![
        (0.0, 0.0),
        (10.0, 2.0),
        (100.0, 5.0),
        (1_000.0, 8.0),
        (5_000.0, 10.0),
    ])
}
