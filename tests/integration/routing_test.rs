//! Routing, health, and middleware tests.

use http::{Method, StatusCode};

use crate::helpers::{TestApp, assert_failure};

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let app = TestApp::healthy();

    for uri in ["/api/events/unknown", "/", "/api/event", "/api/events/earthquakes/1"] {
        let response = app.get(uri).await;
        assert_failure(&response, StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn test_wrong_method_is_not_allowed() {
    let app = TestApp::healthy();

    for method in [Method::POST, Method::PUT, Method::DELETE] {
        let response = app.request(method, "/api/events/earthquakes").await;
        assert_failure(&response, StatusCode::METHOD_NOT_ALLOWED);
    }
    assert!(app.earthquakes.calls().is_empty());
}

#[tokio::test]
async fn test_path_matching_ignores_case_and_trailing_slash() {
    let app = TestApp::healthy();

    let response = app.get("/API/Events/Earthquakes/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_health_reports_status_and_version() {
    let app = TestApp::healthy();

    let response = app.get("/api/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["status"], "ok");
    assert!(response.body["data"]["version"].is_string());
    assert!(response.body["data"]["uptimeSeconds"].is_u64());
    assert!(app.earthquakes.calls().is_empty());
}

#[tokio::test]
async fn test_every_response_carries_a_request_id() {
    let app = TestApp::healthy();

    let ok = app.get("/api/health").await;
    let missing = app.get("/nowhere").await;

    let ok_id = ok.request_id.unwrap();
    let missing_id = missing.request_id.unwrap();
    assert!(!ok_id.is_empty());
    assert_ne!(ok_id, missing_id);
}
