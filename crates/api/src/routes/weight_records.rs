//! Route definitions for weight records.
//!
//! Mounted at `/weight-records` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::weight_records;
use crate::state::AppState;

/// Weight record routes.
///
/// ```text
/// GET    /               -> list_records (?petId, ?startDate&endDate)
/// POST   /               -> create_record
/// GET    /latest/{petId} -> get_latest
/// GET    /{id}           -> get_record
/// PUT    /{id}           -> update_record
/// DELETE /{id}           -> delete_record
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(weight_records::list_records).post(weight_records::create_record),
        )
        .route("/latest/{petId}", get(weight_records::get_latest))
        .route(
            "/{id}",
            get(weight_records::get_record)
                .put(weight_records::update_record)
                .delete(weight_records::delete_record),
        )
}
