//! Volcano variant.

pub mod kind;
pub mod model;

pub use kind::VolcanoType;
pub use model::VolcanoDetails;
