use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

use interface_monitor::api;
use interface_monitor::domain::{ExecutionStatus, LogRecord};
use interface_monitor::state::AppState;

fn test_records() -> Vec<LogRecord> {
    let now = Utc::now();
    let statuses = [
        ExecutionStatus::Success,
        ExecutionStatus::Success,
        ExecutionStatus::Failed,
        ExecutionStatus::Warning,
        ExecutionStatus::Pending,
    ];
    statuses
        .iter()
        .enumerate()
        .map(|(i, &status)| LogRecord {
            id: i as u64 + 1,
            interface_name: if i % 2 == 0 {
                "Payroll-Sync".to_string()
            } else {
                "Benefits-API".to_string()
            },
            integration_key: format!("INT-{:04}", i),
            status,
            message: "Data synchronization completed successfully".to_string(),
            timestamp: now - Duration::minutes(i as i64),
            duration_ms: 1_000,
            records_processed: 100,
        })
        .collect()
}

async fn get_json(uri: &str) -> serde_json::Value {
    let app = api::router(AppState::new(test_records()));
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_check_responds_ok() {
    let app = api::router(AppState::new(test_records()));
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn logs_endpoint_returns_data_metrics_and_trend() {
    let body = get_json("/api/logs").await;

    assert_eq!(body["meta"]["total"], 5);
    assert_eq!(body["meta"]["page"], 1);
    assert_eq!(body["meta"]["page_size"], 50);
    assert_eq!(body["meta"]["total_pages"], 1);

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 5);
    // Wire shape: camelCase record fields, SCREAMING statuses
    assert_eq!(data[0]["interfaceName"], "Payroll-Sync");
    assert_eq!(data[0]["integrationKey"], "INT-0000");
    assert_eq!(data[0]["status"], "SUCCESS");
    assert!(data[0]["durationMs"].is_u64());
    assert!(data[0]["recordsProcessed"].is_u64());

    assert_eq!(body["metrics"]["total"], 5);
    assert_eq!(body["metrics"]["success"], 2);
    assert_eq!(body["metrics"]["successRate"], 40.0);

    let trend = body["trend"].as_array().unwrap();
    assert!(!trend.is_empty());
    assert!(trend[0]["SUCCESS"].is_u64());
}

#[tokio::test]
async fn logs_endpoint_applies_status_filter() {
    let body = get_json("/api/logs?status=FAILED").await;

    assert_eq!(body["meta"]["total"], 1);
    assert_eq!(body["metrics"]["failed"], 1);
    assert_eq!(body["metrics"]["successRate"], 0.0);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["status"], "FAILED");
}

#[tokio::test]
async fn logs_endpoint_applies_search_filter() {
    let body = get_json("/api/logs?q=int-0003").await;

    assert_eq!(body["meta"]["total"], 1);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data[0]["integrationKey"], "INT-0003");
}

#[tokio::test]
async fn out_of_range_page_is_clamped() {
    let body = get_json("/api/logs?page=9").await;

    assert_eq!(body["meta"]["total_pages"], 1);
    assert_eq!(body["meta"]["page"], 1);
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn interfaces_endpoint_lists_distinct_catalog() {
    let body = get_json("/api/interfaces").await;

    let interfaces = body.as_array().unwrap();
    assert_eq!(interfaces.len(), 2);
    assert_eq!(interfaces[0], "Benefits-API");
    assert_eq!(interfaces[1], "Payroll-Sync");
}
