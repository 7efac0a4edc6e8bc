//! Earthquake variant.

pub mod fault;
pub mod magnitude;
pub mod model;

pub use fault::FaultType;
pub use magnitude::MagnitudeType;
pub use model::EarthquakeDetails;
