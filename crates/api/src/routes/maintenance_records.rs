//! Route definitions for maintenance records.
//!
//! Mounted at `/maintenance-records` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::maintenance_records;
use crate::state::AppState;

/// Maintenance record routes.
///
/// ```text
/// GET    /          -> list_records (?type, ?startDate&endDate)
/// POST   /          -> create_record
/// GET    /recent    -> list_recent (?days&type)
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
            get(maintenance_records::list_records).post(maintenance_records::create_record),
        )
        .route("/recent", get(maintenance_records::list_recent))
        .route("/stats", get(maintenance_records::get_stats))
        .route("/export", get(maintenance_records::export_records))
        .route(
            "/{id}",
            get(maintenance_records::get_record)
                .put(maintenance_records::update_record)
                .delete(maintenance_records::delete_record),
        )
}
