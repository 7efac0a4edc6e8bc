//! # geoscope-feeds
//!
//! Source adapters for the upstream hazard feeds. The USGS summary feeds
//! supply earthquakes; NASA EONET supplies volcanoes and wildfires. Every
//! adapter implements [`SourceAdapter`](geoscope_core::traits::SourceAdapter)
//! and is looked up by category through the [`FeedRegistry`].

pub mod client;
pub mod providers;
pub mod registry;

#[cfg(test)]
pub(crate) mod fixture;

pub use client::FeedClient;
pub use providers::{EonetAdapter, UsgsEarthquakeAdapter};
pub use registry::FeedRegistry;
