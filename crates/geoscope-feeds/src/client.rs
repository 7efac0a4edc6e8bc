//! Shared HTTP client for GeoJSON feeds.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use geoscope_core::config::FeedsConfig;
use geoscope_core::error::{AppError, ErrorKind};
use geoscope_core::result::AppResult;
use geoscope_core::types::RawRecord;

/// Top-level shape of a GeoJSON `FeatureCollection`.
#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Value>,
}

/// Thin wrapper over a pooled [`reqwest::Client`] that fetches a GeoJSON
/// feature collection and maps every failure onto a source error kind.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
}

impl FeedClient {
    /// Build a client carrying the configured user agent and timeout.
    pub fn from_config(config: &FeedsConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to build HTTP client: {e}"),
                    e,
                )
            })?;
        Ok(Self { http })
    }

    /// GET `url` with `query` and return the features of the collection.
    pub async fn get_features(
        &self,
        provider: &str,
        url: &str,
        query: &[(&str, String)],
    ) -> AppResult<Vec<RawRecord>> {
        debug!(provider, url, "Fetching feed");

        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| transport_error(provider, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(provider, url, status = status.as_u16(), "Feed returned non-success status");
            return Err(AppError::source_unavailable(format!(
                "{provider} feed answered with status {}",
                status.as_u16()
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(provider, e))?;

        let collection: FeatureCollection = serde_json::from_slice(&body).map_err(|e| {
            warn!(provider, url, error = %e, "Feed body is not a feature collection");
            AppError::with_source(
                ErrorKind::SourceMalformed,
                format!("{provider} feed returned an unexpected payload"),
                e,
            )
        })?;

        debug!(provider, count = collection.features.len(), "Feed fetched");
        Ok(collection.features.into_iter().map(RawRecord::new).collect())
    }
}

/// Map a transport failure onto `SourceUnavailable`, keeping the cause.
fn transport_error(provider: &str, err: reqwest::Error) -> AppError {
    warn!(provider, error = %err, timeout = err.is_timeout(), "Feed request failed");
    let message = if err.is_timeout() {
        format!("{provider} feed did not answer in time")
    } else {
        format!("{provider} feed is unreachable")
    };
    AppError::with_source(ErrorKind::SourceUnavailable, message, err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::FixtureServer;

    #[tokio::test]
    async fn test_reads_features() {
        let server = FixtureServer::start(vec![(
            "/feed.geojson",
            200,
            r#"{"type":"FeatureCollection","features":[{"id":"a"},{"id":"b"}]}"#.to_string(),
        )])
        .await;
        let client = FeedClient::from_config(&FeedsConfig::default()).unwrap();

        let records = client
            .get_features("test", &server.url("/feed.geojson"), &[])
            .await
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].provider_id().as_deref(), Some("b"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_unavailable() {
        let server = FixtureServer::start(vec![("/down", 503, "busy".to_string())]).await;
        let client = FeedClient::from_config(&FeedsConfig::default()).unwrap();

        let err = client
            .get_features("test", &server.url("/down"), &[])
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::SourceUnavailable);
    }

    #[tokio::test]
    async fn test_unexpected_body_is_malformed() {
        let server = FixtureServer::start(vec![("/html", 200, "<html></html>".to_string())]).await;
        let client = FeedClient::from_config(&FeedsConfig::default()).unwrap();

        let err = client
            .get_features("test", &server.url("/html"), &[])
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::SourceMalformed);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_unavailable() {
        let client = FeedClient::from_config(&FeedsConfig::default()).unwrap();
        let err = client
            .get_features("test", "http://127.0.0.1:9/feed", &[])
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::SourceUnavailable);
    }
}
