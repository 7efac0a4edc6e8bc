//! Severity scoring.

pub mod calculator;
pub mod inputs;

pub use calculator::SeverityCalculator;
pub use inputs::{EarthquakeInputs, VolcanoInputs, WildfireInputs};
