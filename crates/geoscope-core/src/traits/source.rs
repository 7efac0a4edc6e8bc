//! Source adapter trait for pluggable hazard feeds.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{FetchParams, HazardCategory, RawRecord};

/// Trait for upstream hazard feeds.
///
/// Implementations exist for the USGS earthquake feed and the NASA EONET
/// event feed. The [`SourceAdapter`] trait is defined here in
/// `geoscope-core` and implemented in `geoscope-feeds`.
///
/// Adapters are stateless: nothing is retained between calls.
#[async_trait]
pub trait SourceAdapter: Send + Sync + std::fmt::Debug + 'static {
    /// The category this adapter produces records for.
    fn category(&self) -> HazardCategory;

    /// Return the provider name (e.g., "usgs", "eonet").
    fn provider(&self) -> &str;

    /// Fetch the raw records matching `params`, in provider order.
    ///
    /// Fails with `SourceUnavailable` when the transport fails or the feed
    /// answers with a non-success status, and with `SourceMalformed` when
    /// the body is not the expected collection of features.
    async fn fetch(&self, params: &FetchParams) -> AppResult<Vec<RawRecord>>;
}
