//! # geoscope-core
//!
//! Core crate for Geoscope. Contains the source adapter trait, configuration
//! schemas, hazard categories, raw feed records, the response envelope,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other Geoscope crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
