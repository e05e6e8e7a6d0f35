pub mod feeding_records;
pub mod feeding_schedules;
pub mod food_types;
pub mod health;
pub mod maintenance_records;
pub mod pets;
pub mod weight_records;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /pets                        list, create
/// /pets/{id}                   get, update, delete
///
/// /food-types                  list, create
/// /food-types/{id}             get, update, delete
///
/// /feeding-schedules           list (?active), create
/// /feeding-schedules/{id}      get, update, delete
///
/// /feeding-records             list (?startDate&endDate | ?limit&offset), create
/// /feeding-records/stats       completion rate (?startDate&endDate)
/// /feeding-records/export      CSV download
/// /feeding-records/{id}        get, update, delete
///
/// /weight-records              list (?petId, ?startDate&endDate), create
/// /weight-records/latest/{petId} latest measurement for a pet
/// /weight-records/{id}         get, update, delete
///
/// /maintenance-records         list (?type, ?startDate&endDate), create
/// /maintenance-records/recent  last N days (?days&type)
/// /maintenance-records/stats   per-kind counts (?startDate&endDate)
/// /maintenance-records/export  CSV download
/// /maintenance-records/{id}    get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/pets", pets::router())
        .nest("/food-types", food_types::router())
        .nest("/feeding-schedules", feeding_schedules::router())
        .nest("/feeding-records", feeding_records::router())
        .nest("/weight-records", weight_records::router())
        .nest("/maintenance-records", maintenance_records::router())
}
