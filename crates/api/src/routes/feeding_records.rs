//! Route definitions for feeding records.
//!
//! Mounted at `/feeding-records` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::feeding_records;
use crate::state::AppState;

/// Feeding record routes.
///
/// ```text
/// GET    /          -> list_records (?startDate&endDate | ?limit&offset)
/// POST   /          -> create_record
/// GET    /stats     -> get_stats (?startDate&endDate, both required)
/// GET    /export    -> export_records (CSV download)
/// GET    /{id}      -> get_record
/// PUT    /{id}      -> update_record
/// DELETE /{id}      -> delete_record
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(feeding_records::list_records).post(feeding_records::create_record),
        )
        .route("/stats", get(feeding_records::get_stats))
        .route("/export", get(feeding_records::export_records))
        .route(
            "/{id}",
            get(feeding_records::get_record)
                .put(feeding_records::update_record)
                .delete(feeding_records::delete_record),
        )
}
