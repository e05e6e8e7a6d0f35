//! Integration tests for the weight record endpoints.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, delete, get, post_json};
use serde_json::json;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_pet(app: &Router, name: &str) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/pets",
        json!({"name": name, "species": "Cat"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn create_weight(app: &Router, pet_id: i64, weight: f64, date: &str) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/weight-records",
        json!({"petId": pet_id, "weight": weight, "recordedDate": date}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Test: create with hydration and range validation
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn create_returns_record_with_nested_pet(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let pet_id = create_pet(&app, "Fluffy").await;

    let response = post_json(
        app,
        "/api/weight-records",
        json!({"petId": pet_id, "weight": 4.25, "recordedDate": "2023-10-28"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["data"]["weight"], 4.25);
    assert_eq!(body["data"]["pet"]["name"], "Fluffy");
}

#[sqlx::test]
async fn create_with_unknown_pet_returns_invalid_pet(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    let response = post_json(
        app,
        "/api/weight-records",
        json!({"petId": 9999, "weight": 4.0, "recordedDate": "2023-10-28"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "INVALID_PET");
}

#[sqlx::test]
async fn create_with_out_of_range_weight_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let pet_id = create_pet(&app, "Fluffy").await;

    let response = post_json(
        app,
        "/api/weight-records",
        json!({"petId": pet_id, "weight": 1000.0, "recordedDate": "2023-10-28"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: latest-per-pet endpoint
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn latest_returns_most_recent_measurement(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let pet_id = create_pet(&app, "Fluffy").await;

    create_weight(&app, pet_id, 4.0, "2023-10-01").await;
    create_weight(&app, pet_id, 4.5, "2023-10-20").await;
    create_weight(&app, pet_id, 4.2, "2023-10-10").await;

    let response = get(app, &format!("/api/weight-records/latest/{pet_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["weight"], 4.5);
    assert_eq!(body["data"]["recordedDate"], "2023-10-20");
}

#[sqlx::test]
async fn latest_for_pet_without_records_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let pet_id = create_pet(&app, "Fluffy").await;

    let response = get(app, &format!("/api/weight-records/latest/{pet_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: per-pet date-range listing
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn range_listing_is_scoped_and_oldest_first(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let fluffy = create_pet(&app, "Fluffy").await;
    let momo = create_pet(&app, "Momo").await;

    create_weight(&app, fluffy, 4.3, "2023-10-31").await;
    create_weight(&app, fluffy, 4.0, "2023-10-01").await;
    // Other pet, same range: excluded.
    create_weight(&app, momo, 7.0, "2023-10-15").await;

    let response = get(
        app,
        &format!("/api/weight-records?petId={fluffy}&startDate=2023-10-01&endDate=2023-10-31"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let records = body["data"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["recordedDate"], "2023-10-01");
    assert_eq!(records[1]["recordedDate"], "2023-10-31");
}

// ---------------------------------------------------------------------------
// Test: pet deletion is blocked while records exist
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn deleting_pet_with_weight_records_returns_in_use_code(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let pet_id = create_pet(&app, "Fluffy").await;
    let record_id = create_weight(&app, pet_id, 4.0, "2023-10-01").await;

    let response = delete(app.clone(), &format!("/api/pets/{pet_id}")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "PET_IN_USE");

    // The pet must survive the blocked delete.
    let response = get(app.clone(), &format!("/api/pets/{pet_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Removing the record unblocks the delete.
    let response = delete(app.clone(), &format!("/api/weight-records/{record_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = delete(app, &format!("/api/pets/{pet_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
