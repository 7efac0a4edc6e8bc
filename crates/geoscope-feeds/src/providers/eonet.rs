//! NASA EONET v3 adapter for volcanoes and wildfires.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use geoscope_core::config::FeedEndpoint;
use geoscope_core::result::AppResult;
use geoscope_core::traits::SourceAdapter;
use geoscope_core::types::{FetchParams, HazardCategory, RawRecord};

use crate::client::FeedClient;

/// Events of one EONET category from `{base}/events/geojson`.
///
/// EONET emits one feature per geometry observation. Features sharing a
/// provider id are folded into one record that keeps the position of the
/// first feature and the properties of the most recent observation.
#[derive(Debug, Clone)]
pub struct EonetAdapter {
    client: FeedClient,
    base_url: String,
    category: HazardCategory,
}

impl EonetAdapter {
    /// Create an adapter for `category` against `base_url`.
    pub fn new(client: FeedClient, base_url: &str, category: HazardCategory) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            category,
        }
    }

    /// Create the adapter from one `[feeds.*]` endpoint.
    pub fn from_endpoint(
        client: FeedClient,
        endpoint: &FeedEndpoint,
        category: HazardCategory,
    ) -> Self {
        Self::new(client, &endpoint.base_url, category)
    }

    fn events_url(&self) -> String {
        format!("{}/events/geojson", self.base_url)
    }
}

/// Fold repeated observations of the same event, keeping first-seen order.
fn fold_observations(records: Vec<RawRecord>) -> Vec<RawRecord> {
    let mut folded: Vec<RawRecord> = Vec::with_capacity(records.len());
    let mut seen: HashMap<String, usize> = HashMap::new();

    for record in records {
        let Some(id) = record.provider_id() else {
            folded.push(record);
            continue;
        };

        match seen.get(&id) {
            None => {
                seen.insert(id, folded.len());
                folded.push(record);
            }
            Some(&index) => {
                let kept = folded[index].instant_any(&["date"]);
                let newer = match (record.instant_any(&["date"]), kept) {
                    (Some(candidate), Some(kept)) => candidate > kept,
                    (Some(_), None) => true,
                    _ => false,
                };
                if newer {
                    let merged = with_properties_of(&folded[index], record);
                    folded[index] = merged;
                }
            }
        }
    }
    folded
}

/// `base` with its `properties` block replaced by the one in `newer`.
fn with_properties_of(base: &RawRecord, newer: RawRecord) -> RawRecord {
    let mut merged = base.as_value().clone();
    let mut newer = newer.into_value();
    if let (Value::Object(target), Some(properties)) = (&mut merged, newer.get_mut("properties")) {
        target.insert("properties".to_string(), properties.take());
    }
    RawRecord::new(merged)
}

#[async_trait]
impl SourceAdapter for EonetAdapter {
    fn category(&self) -> HazardCategory {
        self.category
    }

    fn provider(&self) -> &str {
        "eonet"
    }

    async fn fetch(&self, params: &FetchParams) -> AppResult<Vec<RawRecord>> {
        let query = [
            ("category", self.category.as_str().to_string()),
            ("days", params.period.as_days().to_string()),
        ];
        let records = self
            .client
            .get_features(self.provider(), &self.events_url(), &query)
            .await?;
        let observations = records.len();
        let folded = fold_observations(records);

        debug!(
            category = %self.category,
            observations,
            events = folded.len(),
            "Folded EONET observations"
        );
        Ok(folded)
    }
}
