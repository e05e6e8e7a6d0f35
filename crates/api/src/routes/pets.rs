//! Route definitions for pets.
//!
//! Mounted at `/pets` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::pets;
use crate::state::AppState;

/// Pet routes.
///
/// ```text
/// GET    /          -> list_pets
/// POST   /          -> create_pet
/// GET    /{id}      -> get_pet
/// PUT    /{id}      -> update_pet
/// DELETE /{id}      -> delete_pet
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pets::list_pets).post(pets::create_pet))
        .route(
            "/{id}",
            get(pets::get_pet).put(pets::update_pet).delete(pets::delete_pet),
        )
}
