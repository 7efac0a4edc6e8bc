//! Conversion of raw feed records into typed events.

pub mod builder;
pub mod records;
pub mod sequence;

pub use builder::{EventFactory, FactoryBatch};
pub use sequence::IdSequence;
