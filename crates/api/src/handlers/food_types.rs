//! Handlers for food type CRUD.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use pettrack_core::error::CoreError;
use pettrack_core::food_types::{validate_brand, validate_food_description, validate_food_name};
use pettrack_core::types::DbId;
use pettrack_db::models::food_type::{CreateFoodType, UpdateFoodType};
use pettrack_db::repositories::FoodTypeRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /food-types
///
/// List all food types, alphabetical by name.
pub async fn list_food_types(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let food_types = FoodTypeRepo::find_all(&state.pool).await?;
    Ok(Json(DataResponse { data: food_types }))
}

/// GET /food-types/{id}
///
/// Get a single food type by ID.
pub async fn get_food_type(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let food_type = FoodTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FoodType",
            id,
        }))?;

    Ok(Json(DataResponse { data: food_type }))
}

/// POST /food-types
///
/// Create a new food type.
pub async fn create_food_type(
    State(state): State<AppState>,
    Json(input): Json<CreateFoodType>,
) -> AppResult<impl IntoResponse> {
    validate_food_name(&input.name).map_err(AppError::BadRequest)?;
    if let Some(ref brand) = input.brand {
        validate_brand(brand).map_err(AppError::BadRequest)?;
    }
    if let Some(ref description) = input.description {
        validate_food_description(description).map_err(AppError::BadRequest)?;
    }

    let food_type = FoodTypeRepo::create(&state.pool, &input).await?;

    tracing::info!(food_type_id = food_type.id, name = %food_type.name, "Food type created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: food_type })))
}

/// PUT /food-types/{id}
///
/// Update a food type. Absent fields are left untouched; `brand` and
/// `description` supplied as null or empty are cleared.
pub async fn update_food_type(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFoodType>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref name) = input.name {
        validate_food_name(name).map_err(AppError::BadRequest)?;
    }
    if let Some(Some(ref brand)) = input.brand {
        validate_brand(brand).map_err(AppError::BadRequest)?;
    }
    if let Some(Some(ref description)) = input.description {
        validate_food_description(description).map_err(AppError::BadRequest)?;
    }

    let food_type = FoodTypeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FoodType",
            id,
        }))?;

    tracing::info!(food_type_id = id, "Food type updated");

    Ok(Json(DataResponse { data: food_type }))
}

/// DELETE /food-types/{id}
///
/// Delete a food type. Blocked while feeding schedules still reference it.
pub async fn delete_food_type(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = FoodTypeRepo::delete(&state.pool, id)
        .await
        .map_err(AppError::delete_blocked(
            "FOOD_TYPE_IN_USE",
            "Food type is still used by a feeding schedule and cannot be deleted",
        ))?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "FoodType",
            id,
        }));
    }

    tracing::info!(food_type_id = id, "Food type deleted");

    Ok(StatusCode::NO_CONTENT)
}
