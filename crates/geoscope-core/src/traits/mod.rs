//! Core traits defined in `geoscope-core` and implemented by other crates.

pub mod source;

pub use source::SourceAdapter;
