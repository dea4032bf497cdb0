//! Router-level tests against an in-memory table.
#![cfg(feature = "http-server")]

mod support;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use support::{test_config, SAMPLE_CSV};
use wave_rose::api::{DashboardData, RoseData, SiteList, SiteSummary, TimeSeriesData, SITE_NOT_FOUND_MESSAGE};
use wave_rose::checksum::dataset_checksum;
use wave_rose::http::{create_router, AppState};
use wave_rose::ingest::parse_csv_bytes;
use wave_rose::services::load_and_clean;

fn app() -> axum::Router {
    let config = test_config();
    let records = parse_csv_bytes(SAMPLE_CSV.as_bytes(), &config.sites.allowed).unwrap();
    let table = load_and_clean(records, &config.sites.allowed).unwrap();
    let state = AppState::new(table, config, dataset_checksum(SAMPLE_CSV.as_bytes()));
    create_router(state)
}

async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

async fn get_json<T: serde::de::DeserializeOwned>(uri: &str) -> T {
    let (status, body) = get(uri).await;
    assert_eq!(status, StatusCode::OK, "GET {uri}");
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health() {
    let health: serde_json::Value = get_json("/health").await;
    assert_eq!(health["status"], "ok");
    assert_eq!(health["rows"], 3);
    assert_eq!(health["sites_with_data"], 1);
    assert_eq!(
        health["dataset_checksum"].as_str().unwrap(),
        dataset_checksum(SAMPLE_CSV.as_bytes())
    );
}

#[tokio::test]
async fn test_index_page() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("<select id=\"site\">"));
}

#[tokio::test]
async fn test_list_sites() {
    let sites: SiteList = get_json("/v1/sites").await;
    assert_eq!(sites.sites, vec!["SiteA", "SiteC"]);
    assert_eq!(sites.default_site, "SiteA");
    assert_eq!(sites.sites_with_data, vec!["SiteA"]);
}

#[tokio::test]
async fn test_dashboard_for_site() {
    let data: DashboardData = get_json("/v1/sites/SiteA/dashboard").await;
    assert!(data.message.is_none());
    assert_eq!(data.rose.len(), 2);
    assert_eq!(data.height[0].points.len(), 3);
}

#[tokio::test]
async fn test_dashboard_default_selection() {
    let data: DashboardData = get_json("/v1/dashboard").await;
    assert_eq!(data.site, "SiteA");
    assert!(data.message.is_none());
}

#[tokio::test]
async fn test_dashboard_query_selection() {
    let data: DashboardData = get_json("/v1/dashboard?site=SiteC").await;
    assert_eq!(data.site, "SiteC");
    assert_eq!(data.message.as_deref(), Some(SITE_NOT_FOUND_MESSAGE));
}

#[tokio::test]
async fn test_dashboard_blank_query_is_bad_request() {
    let (status, body) = get("/v1/dashboard?site=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_unknown_site_is_empty_not_error() {
    let data: DashboardData = get_json("/v1/sites/SiteB/dashboard").await;
    assert!(data.is_empty());
    assert_eq!(data.message.as_deref(), Some(SITE_NOT_FOUND_MESSAGE));

    let rose: RoseData = get_json("/v1/sites/SiteB/rose").await;
    assert!(rose.rows.is_empty());
    assert_eq!(rose.total_count, 0);

    let series: TimeSeriesData = get_json("/v1/sites/SiteB/timeseries").await;
    assert!(series.observations.is_empty());
}

#[tokio::test]
async fn test_site_name_with_space() {
    let data: DashboardData = get_json("/v1/sites/Brisbane%20Mk4/dashboard").await;
    assert_eq!(data.site, "Brisbane Mk4");
    assert!(data.is_empty());
}

#[tokio::test]
async fn test_rose_endpoint() {
    let rose: RoseData = get_json("/v1/sites/SiteA/rose").await;
    assert_eq!(rose.total_count, 2);
    let sum: f64 = rose.rows.iter().map(|r| r.percentage).sum();
    assert!((sum - 100.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_timeseries_endpoint_sorted() {
    let series: TimeSeriesData = get_json("/v1/sites/SiteA/timeseries").await;
    assert_eq!(series.observations.len(), 3);
    for pair in series.observations.windows(2) {
        assert!(pair[0].timestamp <= pair[1].timestamp);
    }
}

#[tokio::test]
async fn test_summary_endpoint() {
    let summary: SiteSummary = get_json("/v1/sites/SiteA/summary").await;
    assert_eq!(summary.observation_count, 3);
    assert_eq!(summary.significant_height.count, 2);
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, body) = get("/v2/anything").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["code"], "NOT_FOUND");
}
