//! Router tests against a temporary file store

use std::fs;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

use tanker_app::app::FleetService;
use tanker_app::config::Config;
use tanker_app::repository::open_repositories_at;
use tanker_server::{build_router, AppState};

const TRIPS: &str = r#"[
  {"vehicleNo": "GJ01", "loadStatus": 1, "startDate": "2024-04-05T06:00:00Z", "endTo": "Kandla"},
  {"vehicleNo": "GJ02", "loadStatus": 1, "startDate": "2024-04-04T06:00:00Z",
   "reportingDate": "2024-04-05T09:00:00Z", "endTo": "Surat"},
  {"vehicleNo": "GJ03", "loadStatus": 0, "startDate": "2024-04-04T06:00:00Z",
   "reportingDate": "2024-04-05T09:00:00Z", "endTo": "Bharuch Maintenece Yard"}
]"#;

const USERS: &str = r#"[
  {"userId": "op1", "name": "Ravi", "division": 0, "ownedVehicleNos": ["GJ01", "GJ02", "GJ03"]}
]"#;

const VEHICLES: &str = r#"
[[vehicles]]
vehicle_no = "GJ01"
capacity = 24.0
"#;

fn app() -> (TempDir, Router) {
    let dir = tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("trips.json"), TRIPS).unwrap();
    fs::write(dir.path().join("users.json"), USERS).unwrap();
    fs::write(dir.path().join("vehicles.toml"), VEHICLES).unwrap();
    let repos = open_repositories_at(dir.path().to_path_buf()).unwrap();
    let service = FleetService::new(repos, &Config::default());
    (dir, build_router(AppState::new(service)))
}

async fn get(router: Router, uri: &str) -> (StatusCode, Option<String>, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let request_id = response
        .headers()
        .get("x-request-id")
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, request_id, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_healthz() {
    let (_dir, router) = app();
    let (status, request_id, body) = get(router, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(request_id.is_some_and(|id| id.len() == 36));
}

#[tokio::test]
async fn test_incoming_request_id_is_echoed() {
    let (_dir, router) = app();
    let response = router
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .header("x-request-id", "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-42");
}

#[tokio::test]
async fn test_summary_stats() {
    let (_dir, router) = app();
    let (status, _, body) = get(router, "/summary-stats/op1").await;
    assert_eq!(status, StatusCode::OK);

    let loaded = &body["loaded"];
    assert_eq!(loaded["key"], "loaded");
    assert_eq!(loaded["total"], 2);
    let filters = loaded["filters"].as_array().unwrap();
    assert_eq!(filters.len(), 3);
    assert_eq!(filters[1]["key"], "loaded_total_on_way");
    assert_eq!(filters[1]["count"], 1);

    assert_eq!(body["underMaintenance"]["total"], 1);
    assert_eq!(body["emptyForLoading"]["total"], 0);
}

#[tokio::test]
async fn test_summary_unknown_user_is_404() {
    let (_dir, router) = app();
    let (status, _, body) = get(router, "/summary-stats/ghost").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "user_not_found");
}

#[tokio::test]
async fn test_bucket_data_admin_page() {
    let (_dir, router) = app();
    let (status, _, body) = get(
        router,
        "/bucket-data/op1?bucket=loaded&sortBy=vehicleNo&direction=asc&pageSize=1&pageNo=1&isAdmin=true",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bucket"], "loaded");
    assert_eq!(body["totalCount"], 2);
    assert_eq!(body["matchedCount"], 2);
    assert_eq!(body["pagination"]["totalPages"], 2);
    assert_eq!(body["pagination"]["hasMore"], true);
    assert_eq!(body["sortBy"], "vehicleNo");

    let row = &body["data"][0];
    assert_eq!(row["vehicleNo"], "GJ01");
    assert_eq!(row["supervisor"], "Ravi");
    assert_eq!(row["capacity"], 24.0);
}

#[tokio::test]
async fn test_bucket_data_capacity_na() {
    let (_dir, router) = app();
    let (status, _, body) = get(router, "/bucket-data/op1?bucket=loaded_total_reported&isAdmin=true").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["vehicleNo"], "GJ02");
    assert_eq!(body["data"][0]["capacity"], "N/A");
}

#[tokio::test]
async fn test_bucket_data_invalid_bucket_is_400() {
    let (_dir, router) = app();
    let (status, _, body) = get(router, "/bucket-data/op1?bucket=parked").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "invalid_bucket");
}

#[tokio::test]
async fn test_bucket_data_empty_search() {
    let (_dir, router) = app();
    let (status, _, body) = get(router, "/bucket-data/op1?bucket=maintenance&searchTerm=zzz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
    assert_eq!(body["totalCount"], 0);
    assert_eq!(body["matchedCount"], 1);
    assert_eq!(body["pagination"]["hasMore"], false);
}

#[tokio::test]
async fn test_bucket_data_negative_paging_is_clamped() {
    let (_dir, router) = app();
    let (status, _, body) = get(router, "/bucket-data/op1?bucket=loaded&pageNo=-1&pageSize=-5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["currentPage"], 1);
    assert_eq!(body["pagination"]["pageSize"], 1);
    assert_eq!(body["pagination"]["totalPages"], 2);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_bucket_data_oversized_page_is_capped() {
    let (_dir, router) = app();
    let (status, _, body) = get(router, "/bucket-data/op1?bucket=loaded&pageSize=100000").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["pageSize"], 500);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}
