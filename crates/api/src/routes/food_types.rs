//! Route definitions for food types.
//!
//! Mounted at `/food-types` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::food_types;
use crate::state::AppState;

/// Food type routes.
///
/// ```text
/// GET    /          -> list_food_types
/// POST   /          -> create_food_type
/// GET    /{id}      -> get_food_type
/// PUT    /{id}      -> update_food_type
/// DELETE /{id}      -> delete_food_type
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(food_types::list_food_types).post(food_types::create_food_type),
        )
        .route(
            "/{id}",
            get(food_types::get_food_type)
                .put(food_types::update_food_type)
                .delete(food_types::delete_food_type),
        )
}
