//! Feed registry: resolves a category to its source adapter.

use std::collections::HashMap;
use std::sync::Arc;

use geoscope_core::config::FeedsConfig;
use geoscope_core::error::AppError;
use geoscope_core::result::AppResult;
use geoscope_core::traits::SourceAdapter;
use geoscope_core::types::HazardCategory;

use crate::client::FeedClient;
use crate::providers::{EonetAdapter, UsgsEarthquakeAdapter};

/// Holds one adapter per hazard category.
#[derive(Debug, Clone, Default)]
pub struct FeedRegistry {
    adapters: HashMap<HazardCategory, Arc<dyn SourceAdapter>>,
}

impl FeedRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the production registry: USGS for earthquakes, EONET for
    /// volcanoes and wildfires.
    pub fn from_config(config: &FeedsConfig) -> AppResult<Self> {
        let client = FeedClient::from_config(config)?;

        let mut registry = Self::new();
        registry.register(Arc::new(UsgsEarthquakeAdapter::from_config(
            client.clone(),
            config,
        )));
        registry.register(Arc::new(EonetAdapter::from_endpoint(
            client.clone(),
            &config.volcano,
            HazardCategory::Volcanoes,
        )));
        registry.register(Arc::new(EonetAdapter::from_endpoint(
            client,
            &config.wildfire,
            HazardCategory::Wildfires,
        )));
        Ok(registry)
    }

    /// Register `adapter` under its own category, replacing any previous one.
    pub fn register(&mut self, adapter: Arc<dyn SourceAdapter>) {
        self.adapters.insert(adapter.category(), adapter);
    }

    /// Builder-style [`register`](Self::register), for composing a registry
    /// from custom or stub adapters.
    pub fn with(mut self, adapter: Arc<dyn SourceAdapter>) -> Self {
        self.register(adapter);
        self
    }

    /// Get the adapter for `category`.
    pub fn get(&self, category: HazardCategory) -> AppResult<Arc<dyn SourceAdapter>> {
        self.adapters.get(&category).cloned().ok_or_else(|| {
            AppError::configuration(format!("No source adapter registered for {category}"))
        })
    }

    /// Registered categories in canonical order.
    pub fn categories(&self) -> Vec<HazardCategory> {
        HazardCategory::ALL
            .into_iter()
            .filter(|c| self.adapters.contains_key(c))
            .collect()
    }
}
