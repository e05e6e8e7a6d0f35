//! Handlers for pet CRUD.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use pettrack_core::error::CoreError;
use pettrack_core::pets::{validate_pet_name, validate_species};
use pettrack_core::types::DbId;
use pettrack_db::models::pet::{CreatePet, UpdatePet};
use pettrack_db::repositories::PetRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /pets
///
/// List all pets, newest first.
pub async fn list_pets(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pets = PetRepo::find_all(&state.pool).await?;
    Ok(Json(DataResponse { data: pets }))
}

/// GET /pets/{id}
///
/// Get a single pet by ID.
pub async fn get_pet(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let pet = PetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Pet", id }))?;

    Ok(Json(DataResponse { data: pet }))
}

/// POST /pets
///
/// Create a new pet.
pub async fn create_pet(
    State(state): State<AppState>,
    Json(input): Json<CreatePet>,
) -> AppResult<impl IntoResponse> {
    validate_pet_name(&input.name).map_err(AppError::BadRequest)?;
    validate_species(&input.species).map_err(AppError::BadRequest)?;

    let pet = PetRepo::create(&state.pool, &input).await?;

    tracing::info!(pet_id = pet.id, name = %pet.name, "Pet created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: pet })))
}

/// PUT /pets/{id}
///
/// Update a pet. Absent fields are left untouched.
pub async fn update_pet(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePet>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref name) = input.name {
        validate_pet_name(name).map_err(AppError::BadRequest)?;
    }
    if let Some(ref species) = input.species {
        validate_species(species).map_err(AppError::BadRequest)?;
    }

    let pet = PetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Pet", id }))?;

    tracing::info!(pet_id = id, "Pet updated");

    Ok(Json(DataResponse { data: pet }))
}

/// DELETE /pets/{id}
///
/// Delete a pet. Blocked while weight records still reference it.
pub async fn delete_pet(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PetRepo::delete(&state.pool, id)
        .await
        .map_err(AppError::delete_blocked(
            "PET_IN_USE",
            "Pet still has weight records and cannot be deleted",
        ))?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Pet", id }));
    }

    tracing::info!(pet_id = id, "Pet deleted");

    Ok(StatusCode::NO_CONTENT)
}
