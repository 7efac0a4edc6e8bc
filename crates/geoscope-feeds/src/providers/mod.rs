//! Concrete source adapters.

pub mod eonet;
pub mod usgs;

pub use eonet::EonetAdapter;
pub use usgs::UsgsEarthquakeAdapter;
