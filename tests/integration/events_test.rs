//! Hazard event endpoint tests.

use chrono::{DateTime, Utc};
use http::StatusCode;

use geoscope_core::types::{DEFAULT_MIN_MAGNITUDE, Period};

use crate::helpers::{StubFeed, TestApp, assert_failure};

#[tokio::test]
async fn test_earthquakes_returns_events_in_envelope() {
    let app = TestApp::healthy();
    let started = Utc::now();

    let response = app.get("/api/events/earthquakes").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["message"], "Success");

    let timestamp: DateTime<Utc> = response.body["timestamp"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    assert!(timestamp >= started, "{timestamp} precedes {started}");
    assert!(response.body.get("warnings").is_none());

    let events = response.body["data"].as_array().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["kind"], "earthquake");
    assert_eq!(events[0]["sourceId"], "us7000m9g4");
    assert_eq!(events[0]["magnitudeType"], "Moment");
    assert_eq!(events[1]["sourceId"], "ci40479456");

    for event in events {
        let severity = event["severity"].as_f64().unwrap();
        assert!((0.0..=10.0).contains(&severity), "severity {severity}");
        assert_eq!(event["startDate"], event["endDate"]);
    }
}

#[tokio::test]
async fn test_event_ids_are_unique_and_positive() {
    let app = TestApp::healthy();

    let first = app.get("/api/events/earthquakes").await;
    let second = app.get("/api/events/earthquakes").await;

    let mut ids: Vec<i64> = [first, second]
        .iter()
        .flat_map(|r| r.body["data"].as_array().unwrap().clone())
        .map(|e| e["id"].as_i64().unwrap())
        .collect();
    assert!(ids.iter().all(|&id| id > 0));

    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[tokio::test]
async fn test_query_parameters_reach_the_feed() {
    let app = TestApp::healthy();

    let response = app
        .get("/api/events/earthquakes?period=week&minMagnitude=4.5")
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let calls = app.earthquakes.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].period, Period::Week);
    assert_eq!(calls[0].min_magnitude, 4.5);
}

#[tokio::test]
async fn test_defaults_apply_without_query() {
    let app = TestApp::healthy();

    app.get("/api/events/volcanoes").await;

    let calls = app.volcanoes.calls();
    assert_eq!(calls[0].period, Period::Day);
    assert_eq!(calls[0].min_magnitude, DEFAULT_MIN_MAGNITUDE);
}

#[tokio::test]
async fn test_invalid_query_is_bad_request() {
    let app = TestApp::healthy();

    for uri in [
        "/api/events/earthquakes?period=decade",
        "/api/events/earthquakes?minMagnitude=lots",
        "/api/events/earthquakes?minMagnitude=12",
        "/api/events?minMagnitude=-1",
    ] {
        let response = app.get(uri).await;
        assert_failure(&response, StatusCode::BAD_REQUEST);
    }
    assert!(app.earthquakes.calls().is_empty());
}

#[tokio::test]
async fn test_volcanos_alias_serves_volcanoes() {
    let app = TestApp::healthy();

    let response = app.get("/api/events/volcanos").await;

    assert_eq!(response.status, StatusCode::OK);
    let events = response.body["data"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["kind"], "volcano");
    assert_eq!(events[0]["name"], "Etna Volcano, Italy");
    assert!(events[0]["endDate"].is_null());
}

#[tokio::test]
async fn test_skipped_records_are_reported() {
    let app = TestApp::healthy();

    let response = app.get("/api/events/wildfires").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 1);

    let warnings = response.body["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["category"], "wildfires");
    assert_eq!(warnings[0]["code"], "RECORDS_SKIPPED");
    assert_eq!(warnings[0]["skipped"], 1);
}

#[tokio::test]
async fn test_single_category_source_failure_is_bad_gateway() {
    let app = TestApp::with_feeds(
        StubFeed::Down,
        StubFeed::Records(Vec::new()),
        StubFeed::Records(Vec::new()),
    );

    let response = app.get("/api/events/earthquakes").await;

    assert_failure(&response, StatusCode::BAD_GATEWAY);
    assert_eq!(app.earthquakes.calls().len(), 2);
}

#[tokio::test]
async fn test_combined_returns_every_category() {
    let app = TestApp::healthy();

    let response = app.get("/api/events").await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["earthquakes"].as_array().unwrap().len(), 2);
    assert_eq!(data["volcanoes"].as_array().unwrap().len(), 1);
    assert_eq!(data["wildfires"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_combined_degrades_when_one_feed_is_down() {
    let app = TestApp::with_feeds(
        StubFeed::Records(crate::helpers::earthquake_records()),
        StubFeed::Down,
        StubFeed::Records(crate::helpers::wildfire_records()),
    );

    let response = app.get("/api/events/all").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);

    let data = &response.body["data"];
    assert!(data.get("volcanoes").is_none());
    assert_eq!(data["earthquakes"].as_array().unwrap().len(), 2);

    let warnings = response.body["warnings"].as_array().unwrap();
    let volcano_warning = warnings
        .iter()
        .find(|w| w["category"] == "volcanoes")
        .unwrap();
    assert_eq!(volcano_warning["code"], "SOURCE_UNAVAILABLE");
}

#[tokio::test]
async fn test_combined_succeeds_when_every_feed_is_down() {
    let app = TestApp::with_feeds(StubFeed::Down, StubFeed::Down, StubFeed::Down);

    let response = app.get("/api/events").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"], serde_json::json!({}));
    assert_eq!(response.body["warnings"].as_array().unwrap().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_hanging_feed_times_out() {
    let app = TestApp::with_feeds(
        StubFeed::Records(crate::helpers::earthquake_records()),
        StubFeed::Hang,
        StubFeed::Records(Vec::new()),
    );

    let combined = app.get("/api/events").await;
    assert_eq!(combined.status, StatusCode::OK);
    let warnings = combined.body["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["category"], "volcanoes");
    assert_eq!(warnings[0]["code"], "SOURCE_TIMEOUT");

    let single = app.get("/api/events/volcanoes").await;
    assert_failure(&single, StatusCode::BAD_GATEWAY);
}
