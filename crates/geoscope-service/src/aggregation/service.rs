//! Aggregation service: fetch, build, and combine hazard events.

use std::time::Duration;

use futures::future::join_all;
use tracing::{info, warn};

use geoscope_core::config::FeedsConfig;
use geoscope_core::error::{AppError, ErrorKind};
use geoscope_core::result::AppResult;
use geoscope_core::traits::SourceAdapter;
use geoscope_core::types::{FetchParams, HazardCategory, RawRecord, Warning};
use geoscope_feeds::FeedRegistry;

use super::result::{CategoryResult, CombinedEvents, CombinedResult};
use crate::factory::EventFactory;

/// Why a category produced no events.
#[derive(Debug)]
enum FetchFailure {
    /// The adapter did not finish before the deadline.
    Timeout,
    /// The adapter or the registry returned an error.
    Failed(AppError),
}

/// Orchestrates the source adapters and the event factory.
///
/// Every adapter call runs under one deadline that also covers the optional
/// retry. A single-category request fails when its adapter fails; a combined
/// request turns adapter failures into warnings and returns the rest.
#[derive(Debug, Clone)]
pub struct AggregationService {
    registry: FeedRegistry,
    factory: EventFactory,
    deadline: Duration,
    retry_attempts: u32,
}

impl AggregationService {
    /// Creates a new aggregation service.
    pub fn new(registry: FeedRegistry, factory: EventFactory, config: &FeedsConfig) -> Self {
        Self {
            registry,
            factory,
            deadline: Duration::from_secs(config.request_timeout_seconds),
            retry_attempts: config.retry_attempts.min(1),
        }
    }

    /// Events of one category.
    ///
    /// Fails with `SourceUnavailable` or `SourceMalformed` when the adapter
    /// fails; a timeout counts as `SourceUnavailable`.
    pub async fn get_by_category(
        &self,
        category: HazardCategory,
        params: &FetchParams,
    ) -> AppResult<CategoryResult> {
        self.collect(category, params)
            .await
            .map_err(|failure| match failure {
                FetchFailure::Timeout => AppError::source_unavailable(format!(
                    "{} feed did not respond within {}s",
                    category.label(),
                    self.deadline.as_secs()
                )),
                FetchFailure::Failed(e) => e,
            })
    }

    /// Events of every registered category, fetched concurrently.
    ///
    /// Source failures become warnings naming the category. Any other error
    /// fails the whole request.
    pub async fn get_all(&self, params: &FetchParams) -> AppResult<CombinedResult> {
        let categories = self.registry.categories();
        let outcomes = join_all(
            categories
                .iter()
                .map(|&category| async move { (category, self.collect(category, params).await) }),
        )
        .await;

        let mut combined = CombinedResult {
            data: CombinedEvents::default(),
            warnings: Vec::new(),
        };
        for (category, outcome) in outcomes {
            match outcome {
                Ok(result) => {
                    combined.data.insert(category, result.events);
                    combined.warnings.extend(result.warnings);
                }
                Err(FetchFailure::Timeout) => {
                    combined
                        .warnings
                        .push(Warning::timeout(category, self.deadline.as_secs()));
                }
                Err(FetchFailure::Failed(e)) if e.kind.is_source_failure() => {
                    combined.warnings.push(Warning::source_failure(category, &e));
                }
                Err(FetchFailure::Failed(e)) => return Err(e),
            }
        }

        info!(
            categories = categories.len(),
            warnings = combined.warnings.len(),
            "Combined hazard request served"
        );
        Ok(combined)
    }

    async fn collect(
        &self,
        category: HazardCategory,
        params: &FetchParams,
    ) -> Result<CategoryResult, FetchFailure> {
        let adapter = self.registry.get(category).map_err(FetchFailure::Failed)?;

        let fetch = self.fetch_with_retry(adapter.as_ref(), params);
        let records = match tokio::time::timeout(self.deadline, fetch).await {
            Ok(Ok(records)) => records,
            Ok(Err(e)) => {
                warn!(
                    category = %category,
                    provider = adapter.provider(),
                    error = %e,
                    "Source adapter failed"
                );
                return Err(FetchFailure::Failed(e));
            }
            Err(_) => {
                warn!(
                    category = %category,
                    provider = adapter.provider(),
                    deadline_secs = self.deadline.as_secs(),
                    "Source adapter timed out"
                );
                return Err(FetchFailure::Timeout);
            }
        };

        let batch = self.factory.build_batch(category.into(), records);
        let mut warnings = Vec::new();
        if batch.skipped > 0 {
            warnings.push(Warning::records_skipped(category, batch.skipped));
        }
        Ok(CategoryResult {
            events: batch.events,
            warnings,
        })
    }

    /// Fetch once, retrying transport failures up to `retry_attempts` times.
    async fn fetch_with_retry(
        &self,
        adapter: &dyn SourceAdapter,
        params: &FetchParams,
    ) -> AppResult<Vec<RawRecord>> {
        let mut attempt = 0;
        loop {
            match adapter.fetch(params).await {
                Ok(records) => return Ok(records),
                Err(e)
                    if e.kind == ErrorKind::SourceUnavailable && attempt < self.retry_attempts =>
                {
                    attempt += 1;
                    warn!(
                        provider = adapter.provider(),
                        attempt,
                        error = %e,
                        "Retrying source adapter"
                    );
                }
                Err(e) => return Err(e),
            }
        }
    }
}
