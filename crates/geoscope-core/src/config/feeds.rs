//! Upstream hazard feed configuration.

use serde::{Deserialize, Serialize};

/// Settings shared by every source adapter plus one endpoint per feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedsConfig {
    /// Overall deadline for one adapter call, retries included.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Extra attempts after a failed fetch. Only `0` and `1` are accepted.
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,
    /// `User-Agent` header sent upstream.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// USGS GeoJSON summary feed.
    #[serde(default = "default_earthquake_endpoint")]
    pub earthquake: FeedEndpoint,
    /// EONET endpoint used for volcano events.
    #[serde(default = "default_eonet_endpoint")]
    pub volcano: FeedEndpoint,
    /// EONET endpoint used for wildfire events.
    #[serde(default = "default_eonet_endpoint")]
    pub wildfire: FeedEndpoint,
}

/// A single upstream endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedEndpoint {
    /// Base URL without a trailing slash.
    pub base_url: String,
}

impl Default for FeedsConfig {
    fn default() -> Self {
        Self {
            request_timeout_seconds: default_request_timeout(),
            retry_attempts: default_retry_attempts(),
            user_agent: default_user_agent(),
            earthquake: default_earthquake_endpoint(),
            volcano: default_eonet_endpoint(),
            wildfire: default_eonet_endpoint(),
        }
    }
}

fn default_request_timeout() -> u64 {
    10
}

fn default_retry_attempts() -> u32 {
    1
}

fn default_user_agent() -> String {
    format!("geoscope/{}", env!("CARGO_PKG_VERSION"))
}

fn default_earthquake_endpoint() -> FeedEndpoint {
    FeedEndpoint {
        base_url: "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary".to_string(),
    }
}

fn default_eonet_endpoint() -> FeedEndpoint {
    FeedEndpoint {
        base_url: "https://eonet.gsfc.nasa.gov/api/v3".to_string(),
    }
}
