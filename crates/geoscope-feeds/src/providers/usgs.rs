//! USGS GeoJSON summary feed adapter.

use async_trait::async_trait;
use tracing::debug;

use geoscope_core::config::FeedsConfig;
use geoscope_core::result::AppResult;
use geoscope_core::traits::SourceAdapter;
use geoscope_core::types::{FetchParams, HazardCategory, RawRecord};

use crate::client::FeedClient;

/// Published magnitude buckets, tightest last.
const BUCKETS: [(f64, &str); 3] = [(4.5, "4.5"), (2.5, "2.5"), (1.0, "1.0")];

/// Earthquakes from `{base}/{bucket}_{period}.geojson`.
///
/// The bucket is the tightest published threshold at or below the requested
/// minimum magnitude; records under the minimum are then dropped here.
/// Records without a magnitude pass through so the event factory can count
/// them as skipped.
#[derive(Debug, Clone)]
pub struct UsgsEarthquakeAdapter {
    client: FeedClient,
    base_url: String,
}

impl UsgsEarthquakeAdapter {
    /// Create an adapter against `base_url`.
    pub fn new(client: FeedClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create the adapter from the `[feeds]` section.
    pub fn from_config(client: FeedClient, config: &FeedsConfig) -> Self {
        Self::new(client, &config.earthquake.base_url)
    }

    /// Summary feed URL for `params`.
    pub fn feed_url(&self, params: &FetchParams) -> String {
        format!(
            "{}/{}_{}.geojson",
            self.base_url,
            bucket_for(params.min_magnitude),
            params.period.as_str()
        )
    }
}

/// Tightest published bucket at or below `min_magnitude`.
fn bucket_for(min_magnitude: f64) -> &'static str {
    BUCKETS
        .iter()
        .find(|(threshold, _)| min_magnitude >= *threshold)
        .map(|(_, name)| *name)
        .unwrap_or("all")
}

#[async_trait]
impl SourceAdapter for UsgsEarthquakeAdapter {
    fn category(&self) -> HazardCategory {
        HazardCategory::Earthquakes
    }

    fn provider(&self) -> &str {
        "usgs"
    }

    async fn fetch(&self, params: &FetchParams) -> AppResult<Vec<RawRecord>> {
        let url = self.feed_url(params);
        let records = self.client.get_features(self.provider(), &url, &[]).await?;
        let total = records.len();

        let kept: Vec<RawRecord> = records
            .into_iter()
            .filter(|record| {
                record
                    .f64_any(&["mag"])
                    .is_none_or(|mag| mag >= params.min_magnitude)
            })
            .collect();

        debug!(
            total,
            kept = kept.len(),
            min_magnitude = params.min_magnitude,
            "Filtered earthquake records"
        );
        Ok(kept)
    }
}
