//! Shared test helpers for integration tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use geoscope_api::{AppState, build_app};
use geoscope_core::AppError;
use geoscope_core::config::AppConfig;
use geoscope_core::result::AppResult;
use geoscope_core::traits::SourceAdapter;
use geoscope_core::types::{FetchParams, HazardCategory, RawRecord};
use geoscope_feeds::FeedRegistry;
use geoscope_service::{AggregationService, EventFactory};

/// What a stub feed answers with.
#[derive(Debug, Clone)]
pub enum StubFeed {
    /// Return these records.
    Records(Vec<RawRecord>),
    /// Fail every call as unavailable.
    Down,
    /// Never answer.
    Hang,
}

/// A source adapter serving canned records and remembering its calls.
#[derive(Debug)]
pub struct StubAdapter {
    category: HazardCategory,
    feed: StubFeed,
    calls: Mutex<Vec<FetchParams>>,
}

impl StubAdapter {
    pub fn new(category: HazardCategory, feed: StubFeed) -> Arc<Self> {
        Arc::new(Self {
            category,
            feed,
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Parameters of every call so far.
    pub fn calls(&self) -> Vec<FetchParams> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SourceAdapter for StubAdapter {
    fn category(&self) -> HazardCategory {
        self.category
    }

    fn provider(&self) -> &str {
        "stub"
    }

    async fn fetch(&self, params: &FetchParams) -> AppResult<Vec<RawRecord>> {
        self.calls.lock().unwrap().push(*params);
        match &self.feed {
            StubFeed::Records(records) => Ok(records.clone()),
            StubFeed::Down => Err(AppError::source_unavailable(format!(
                "{} feed returned 503",
                self.category.label()
            ))),
            StubFeed::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(Vec::new())
            }
        }
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    pub earthquakes: Arc<StubAdapter>,
    pub volcanoes: Arc<StubAdapter>,
    pub wildfires: Arc<StubAdapter>,
}

/// A parsed test response.
pub struct TestResponse {
    pub status: StatusCode,
    pub request_id: Option<String>,
    pub body: Value,
}

impl TestApp {
    /// App whose three feeds all serve sample records.
    pub fn healthy() -> Self {
        Self::with_feeds(
            StubFeed::Records(earthquake_records()),
            StubFeed::Records(volcano_records()),
            StubFeed::Records(wildfire_records()),
        )
    }

    /// App with a custom answer per feed.
    pub fn with_feeds(earthquakes: StubFeed, volcanoes: StubFeed, wildfires: StubFeed) -> Self {
        let mut config = AppConfig::default();
        config.feeds.request_timeout_seconds = 1;

        let earthquakes = StubAdapter::new(HazardCategory::Earthquakes, earthquakes);
        let volcanoes = StubAdapter::new(HazardCategory::Volcanoes, volcanoes);
        let wildfires = StubAdapter::new(HazardCategory::Wildfires, wildfires);

        let registry = FeedRegistry::new()
            .with(earthquakes.clone())
            .with(volcanoes.clone())
            .with(wildfires.clone());
        let aggregation =
            AggregationService::new(registry, EventFactory::default(), &config.feeds);

        let cors = config.server.cors.clone();
        let router = build_app(AppState::new(config, aggregation), &cors);

        Self {
            router,
            earthquakes,
            volcanoes,
            wildfires,
        }
    }

    /// Send a request without a body.
    pub async fn request(&self, method: Method, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let request_id = response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        TestResponse {
            status,
            request_id,
            body,
        }
    }

    /// GET shorthand.
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri).await
    }
}

/// Assert the failure envelope shape.
pub fn assert_failure(response: &TestResponse, status: StatusCode) {
    assert_eq!(response.status, status, "body: {}", response.body);
    assert_eq!(response.body["success"], false);
    assert!(response.body["data"].is_null());
    assert!(response.body["message"].as_str().is_some_and(|m| !m.is_empty()));
    assert!(response.body["timestamp"].is_string());
}

pub fn earthquake_records() -> Vec<RawRecord> {
    vec![
        RawRecord::new(json!({
            "type": "Feature",
            "id": "us7000m9g4",
            "properties": {
                "mag": 6.1,
                "place": "45 km SSE of Hualien City, Taiwan",
                "time": 1712000000000_i64,
                "magType": "mww",
                "tsunami": 0,
                "title": "M 6.1 - 45 km SSE of Hualien City, Taiwan",
                "url": "https://earthquake.usgs.gov/earthquakes/eventpage/us7000m9g4"
            },
            "geometry": { "type": "Point", "coordinates": [121.7, 23.6, 22.5] }
        })),
        RawRecord::new(json!({
            "type": "Feature",
            "id": "ci40479456",
            "properties": {
                "mag": 3.2,
                "place": "10 km NE of Ridgecrest, CA",
                "time": 1712003600000_i64,
                "magType": "ml",
                "tsunami": 0
            },
            "geometry": { "type": "Point", "coordinates": [-117.6, 35.7, 8.1] }
        })),
    ]
}

pub fn volcano_records() -> Vec<RawRecord> {
    vec![RawRecord::new(json!({
        "id": "EONET_6464",
        "properties": {
            "title": "Etna Volcano, Italy",
            "date": "2024-03-01T12:00:00Z",
            "closed": null
        },
        "geometry": { "type": "Point", "coordinates": [14.999, 37.734] }
    }))]
}

pub fn wildfire_records() -> Vec<RawRecord> {
    vec![
        RawRecord::new(json!({
            "id": "EONET_7001",
            "properties": {
                "title": "Park Fire, California",
                "date": "2024-07-24T18:00:00Z",
                "magnitudeValue": 12000.0,
                "magnitudeUnit": "acres"
            },
            "geometry": { "type": "Point", "coordinates": [-121.8, 39.9] }
        })),
        // No date: left out by the factory.
        RawRecord::new(json!({
            "id": "EONET_7002",
            "properties": { "title": "Unnamed Fire" },
            "geometry": { "type": "Point", "coordinates": [-120.0, 38.0] }
        })),
    ]
}
