//! Integration tests for the maintenance record endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Test: create with kind validation
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn create_water_record_returns_201(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    let response = post_json(
        app,
        "/api/maintenance-records",
        json!({"type": "water", "performedAt": "2023-10-28T09:00:00Z"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["data"]["type"], "water");
    // No description supplied: omitted from the payload.
    assert!(body["data"].get("description").is_none());
}

#[sqlx::test]
async fn create_with_unknown_kind_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    let response = post_json(
        app,
        "/api/maintenance-records",
        json!({"type": "grooming", "performedAt": "2023-10-28T09:00:00Z"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: stats endpoint
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn stats_counts_per_kind(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    for (kind, hour) in [("water", 9), ("water", 15), ("toilet", 12)] {
        let response = post_json(
            app.clone(),
            "/api/maintenance-records",
            json!({"type": kind, "performedAt": format!("2023-10-28T{hour:02}:00:00Z")}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(
        app,
        "/api/maintenance-records/stats?startDate=2023-10-28&endDate=2023-10-28",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["water"], 2);
    assert_eq!(body["data"]["toilet"], 1);
    assert_eq!(body["data"]["total"], 3);
}

#[sqlx::test]
async fn stats_without_date_range_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    let response = get(app, "/api/maintenance-records/stats").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: recent window
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn recent_rejects_out_of_range_days(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    let response = get(app, "/api/maintenance-records/recent?days=9999").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn recent_filters_by_kind(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    let now = chrono::Utc::now().to_rfc3339();
    for kind in ["water", "toilet"] {
        let response = post_json(
            app.clone(),
            "/api/maintenance-records",
            json!({"type": kind, "performedAt": now}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(app, "/api/maintenance-records/recent?type=water").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let records = body["data"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["type"], "water");
}
