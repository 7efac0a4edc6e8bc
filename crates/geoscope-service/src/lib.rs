//! # geoscope-service
//!
//! Business logic for Geoscope. The [`SeverityCalculator`] scores events,
//! the [`EventFactory`] turns raw feed records into typed events, and the
//! [`AggregationService`] fans requests out to the source adapters and
//! applies the partial-failure policy.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time.

pub mod aggregation;
pub mod factory;
pub mod severity;

pub use aggregation::{AggregationService, CategoryResult, CombinedEvents, CombinedResult};
pub use factory::{EventFactory, FactoryBatch, IdSequence};
pub use severity::{EarthquakeInputs, SeverityCalculator, VolcanoInputs, WildfireInputs};
