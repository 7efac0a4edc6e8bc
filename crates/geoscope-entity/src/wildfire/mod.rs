//! Wildfire variant.

pub mod model;
pub mod unit;

pub use model::WildfireDetails;
pub use unit::AreaUnit;
