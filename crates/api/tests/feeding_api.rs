//! Integration tests for food type, feeding schedule, and feeding record
//! endpoints: domain error codes, completion statistics, CSV export.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, body_text, delete, get, post_json};
use serde_json::json;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_food_type(app: &Router, name: &str) -> i64 {
    let response = post_json(app.clone(), "/api/food-types", json!({"name": name})).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn create_schedule(app: &Router, time: &str, food_type_id: i64) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/feeding-schedules",
        json!({"time": time, "foodTypeId": food_type_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn create_record(app: &Router, schedule_id: i64, actual_time: &str, completed: bool) {
    let response = post_json(
        app.clone(),
        "/api/feeding-records",
        json!({
            "feedingScheduleId": schedule_id,
            "actualTime": actual_time,
            "completed": completed,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Test: domain error codes for reference violations
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn schedule_with_unknown_food_type_returns_invalid_food_type(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    let response = post_json(
        app,
        "/api/feeding-schedules",
        json!({"time": "08:00", "foodTypeId": 9999}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "INVALID_FOOD_TYPE");
}

#[sqlx::test]
async fn schedule_with_bad_time_returns_validation_error(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let food_type_id = create_food_type(&app, "Dry Food").await;

    let response = post_json(
        app,
        "/api/feeding-schedules",
        json!({"time": "25:99", "foodTypeId": food_type_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[sqlx::test]
async fn deleting_referenced_food_type_returns_in_use_code(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let food_type_id = create_food_type(&app, "Dry Food").await;
    create_schedule(&app, "08:00", food_type_id).await;

    let response = delete(app.clone(), &format!("/api/food-types/{food_type_id}")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "FOOD_TYPE_IN_USE");

    // The food type must survive the blocked delete.
    let response = get(app, &format!("/api/food-types/{food_type_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Test: hydration through the HTTP boundary
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn record_response_nests_schedule_and_food_type(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let food_type_id = create_food_type(&app, "Wet Food").await;
    let schedule_id = create_schedule(&app, "08:00", food_type_id).await;

    let response = post_json(
        app.clone(),
        "/api/feeding-records",
        json!({
            "feedingScheduleId": schedule_id,
            "actualTime": "2023-10-28T08:05:00Z",
            "completed": true,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    let record = &body["data"];
    assert_eq!(record["feedingSchedule"]["id"], schedule_id);
    assert_eq!(record["feedingSchedule"]["foodType"]["name"], "Wet Food");
}

// ---------------------------------------------------------------------------
// Test: schedule active filter
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn active_query_filters_schedules(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let food_type_id = create_food_type(&app, "Dry Food").await;
    create_schedule(&app, "08:00", food_type_id).await;

    let response = post_json(
        app.clone(),
        "/api/feeding-schedules",
        json!({"time": "19:00", "foodTypeId": food_type_id, "isActive": false}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get(app.clone(), "/api/feeding-schedules?active=true").await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let response = get(app, "/api/feeding-schedules").await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Test: completion statistics over HTTP
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn stats_reports_one_of_two_completed_as_fifty_percent(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let food_type_id = create_food_type(&app, "Test Food").await;
    let schedule_id = create_schedule(&app, "08:00", food_type_id).await;

    create_record(&app, schedule_id, "2023-10-28T08:00:00Z", true).await;
    create_record(&app, schedule_id, "2023-10-28T19:00:00Z", false).await;

    let response = get(
        app,
        "/api/feeding-records/stats?startDate=2023-10-28&endDate=2023-10-28",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["total"], 2);
    assert_eq!(body["data"]["completed"], 1);
    assert_eq!(body["data"]["rate"], 50.0);
}

#[sqlx::test]
async fn stats_without_date_range_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    let response = get(app, "/api/feeding-records/stats").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: CSV export
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn export_serves_csv_attachment(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let food_type_id = create_food_type(&app, "Dry Food").await;
    let schedule_id = create_schedule(&app, "08:00", food_type_id).await;
    create_record(&app, schedule_id, "2023-10-28T08:00:00Z", true).await;

    let response = get(
        app,
        "/api/feeding-records/export?startDate=2023-10-28&endDate=2023-10-28",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "text/csv; charset=utf-8"
    );
    assert!(response.headers()["content-disposition"]
        .to_str()
        .unwrap()
        .contains("feeding_records_2023-10-28_2023-10-28.csv"));

    let body = body_text(response).await;
    assert!(body.starts_with('\u{feff}'), "CSV must begin with a BOM");
    assert!(body.contains("ID,Actual Time,Scheduled Time,Food Type,Completed,Notes,Created At"));
    assert!(body.contains("\"Dry Food\""));
}
