//! Route definitions for feeding schedules.
//!
//! Mounted at `/feeding-schedules` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::feeding_schedules;
use crate::state::AppState;

/// Feeding schedule routes.
///
/// ```text
/// GET    /          -> list_schedules (?active)
/// POST   /          -> create_schedule
/// GET    /{id}      -> get_schedule
/// PUT    /{id}      -> update_schedule
/// DELETE /{id}      -> delete_schedule
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(feeding_schedules::list_schedules).post(feeding_schedules::create_schedule),
        )
        .route(
            "/{id}",
            get(feeding_schedules::get_schedule)
                .put(feeding_schedules::update_schedule)
                .delete(feeding_schedules::delete_schedule),
        )
}
