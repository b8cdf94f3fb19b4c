//! HTTP API integration tests
//!
//! Exercises the real routes with a temp-CSV-backed locator behind
//! the `IpLocator` trait object, exactly as the server wires it.

use std::io::Write;
use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{web, App};
use tempfile::NamedTempFile;

use ipfinder::api::services::{health_routes, lookup_routes};
use ipfinder::datastore::{CsvIpLocator, IpLocator};

// =============================================================================
// Test Setup
// =============================================================================

const SAMPLE_DATA: &str = "\
8.8.8.8,Mountain View,US
8.8.4.4,Mountain View,US
1.1.1.1,Sydney,AU
5.5.5.5,Old City,XX
5.5.5.5,Berlin,DE
";

fn sample_locator() -> (web::Data<Arc<dyn IpLocator>>, NamedTempFile) {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(SAMPLE_DATA.as_bytes())
        .expect("Failed to write temp file");

    let locator: Arc<dyn IpLocator> =
        Arc::new(CsvIpLocator::from_path(file.path()).expect("Failed to load locator"));
    (web::Data::new(locator), file)
}

macro_rules! test_app {
    ($locator:expr) => {
        test::init_service(
            App::new()
                .app_data($locator.clone())
                .service(health_routes())
                .service(lookup_routes()),
        )
        .await
    };
}

// =============================================================================
// /healthz
// =============================================================================

#[tokio::test]
async fn test_healthz_ok() {
    let (locator, _file) = sample_locator();
    let app = test_app!(locator);

    let resp = test::call_service(&app, TestRequest::get().uri("/healthz").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!({"status": "ok"}));
}

// =============================================================================
// /v1/find-country
// =============================================================================

#[tokio::test]
async fn test_find_country_ok() {
    let (locator, _file) = sample_locator();
    let app = test_app!(locator);

    let req = TestRequest::get()
        .uri("/v1/find-country?ip=8.8.8.8")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        serde_json::json!({"country": "US", "city": "Mountain View"})
    );
}

#[tokio::test]
async fn test_find_country_invalid_ip() {
    let (locator, _file) = sample_locator();
    let app = test_app!(locator);

    let req = TestRequest::get()
        .uri("/v1/find-country?ip=999.999.999.999")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid IP");
}

#[tokio::test]
async fn test_find_country_not_found() {
    let (locator, _file) = sample_locator();
    let app = test_app!(locator);

    let req = TestRequest::get()
        .uri("/v1/find-country?ip=9.9.9.9")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "not found");
}

#[tokio::test]
async fn test_find_country_duplicate_uses_last_row() {
    let (locator, _file) = sample_locator();
    let app = test_app!(locator);

    let req = TestRequest::get()
        .uri("/v1/find-country?ip=5.5.5.5")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!({"country": "DE", "city": "Berlin"}));
}

// =============================================================================
// /v1/suggest
// =============================================================================

#[tokio::test]
async fn test_suggest_ok() {
    let (locator, _file) = sample_locator();
    let app = test_app!(locator);

    let req = TestRequest::get()
        .uri("/v1/suggest?prefix=8.&limit=10")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        serde_json::json!({"suggestions": ["8.8.4.4", "8.8.8.8"]})
    );
}

#[tokio::test]
async fn test_suggest_default_limit() {
    let (locator, _file) = sample_locator();
    let app = test_app!(locator);

    let req = TestRequest::get().uri("/v1/suggest?prefix=8.").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["suggestions"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_suggest_invalid_prefix() {
    let (locator, _file) = sample_locator();
    let app = test_app!(locator);

    for uri in [
        "/v1/suggest?prefix=8.a",
        "/v1/suggest?prefix=",
        "/v1/suggest?prefix=1234567890123456",
    ] {
        let resp = test::call_service(&app, TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "uri: {}", uri);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid prefix");
    }
}

#[tokio::test]
async fn test_suggest_out_of_range_limit_is_clamped() {
    let (locator, _file) = sample_locator();
    let app = test_app!(locator);

    // limit=0 按 1 处理，不是 400
    let req = TestRequest::get()
        .uri("/v1/suggest?prefix=8.&limit=0")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["suggestions"], serde_json::json!(["8.8.4.4"]));

    // limit=1000 按 50 处理
    let req = TestRequest::get()
        .uri("/v1/suggest?prefix=8.&limit=1000")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["suggestions"],
        serde_json::json!(["8.8.4.4", "8.8.8.8"])
    );
}

#[tokio::test]
async fn test_suggest_no_match_returns_empty_list() {
    let (locator, _file) = sample_locator();
    let app = test_app!(locator);

    let req = TestRequest::get()
        .uri("/v1/suggest?prefix=203.&limit=10")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!({"suggestions": []}));
}
