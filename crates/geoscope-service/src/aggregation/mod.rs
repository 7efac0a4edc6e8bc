//! Feed aggregation and the partial-failure policy.

pub mod result;
pub mod service;

pub use result::{CategoryResult, CombinedEvents, CombinedResult};
pub use service::AggregationService;
