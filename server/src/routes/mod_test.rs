use std::path::PathBuf;

use axum::body::{Body, to_bytes};
use axum::http::Request;
use tower::ServiceExt;

use super::*;

fn temp_data_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("dashboard-routes-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

async fn get(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn healthz_returns_ok() {
    let dir = temp_data_dir();
    let (status, _) = get(api_routes(AppState::new(dir.clone())), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test]
async fn data_files_are_served_verbatim() {
    let dir = temp_data_dir();
    let doc = r#"{"total_permits_30d":42,"by_basin":{"Permian":30}}"#;
    std::fs::write(dir.join("rrc_permits.json"), doc).unwrap();

    let (status, body) = get(api_routes(AppState::new(dir.clone())), "/data/rrc_permits.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, doc.as_bytes());

    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test]
async fn missing_data_file_is_not_found() {
    let dir = temp_data_dir();
    let (status, _) = get(api_routes(AppState::new(dir.clone())), "/data/ercot_queue.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test]
async fn dataset_status_lists_availability() {
    let dir = temp_data_dir();
    std::fs::write(dir.join("rrc_enforcement.json"), r#"{"updated_at":"2025-01-31","items":[]}"#).unwrap();

    let (status, body) = get(api_routes(AppState::new(dir.clone())), "/api/datasets").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["name"], "ercot_queue");
    assert_eq!(entries[0]["available"], false);
    assert_eq!(entries[2]["name"], "rrc_enforcement");
    assert_eq!(entries[2]["available"], true);
    assert_eq!(entries[2]["updated_at"], "2025-01-31");

    std::fs::remove_dir_all(dir).unwrap();
}
