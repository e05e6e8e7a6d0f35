//! Handlers for weight record CRUD and latest-per-pet lookup.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;

use pettrack_core::error::CoreError;
use pettrack_core::feeding::validate_notes;
use pettrack_core::types::DbId;
use pettrack_core::weights::validate_weight;
use pettrack_db::models::weight_record::{CreateWeightRecord, UpdateWeightRecord};
use pettrack_db::repositories::WeightRecordRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for listing weight records.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightListParams {
    pub pet_id: Option<DbId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// GET /weight-records?petId=&startDate=&endDate=
///
/// List weight records, newest measurement first. With a pet and both date
/// bounds supplied the list is restricted to that pet's range (inclusive,
/// oldest first for charting).
pub async fn list_records(
    State(state): State<AppState>,
    Query(params): Query<WeightListParams>,
) -> AppResult<impl IntoResponse> {
    let records = match (params.pet_id, params.start_date, params.end_date) {
        (Some(pet_id), Some(start), Some(end)) => {
            WeightRecordRepo::find_by_pet_and_date_range(&state.pool, pet_id, start, end).await?
        }
        _ => WeightRecordRepo::find_all(&state.pool, params.pet_id).await?,
    };

    Ok(Json(DataResponse { data: records }))
}

/// GET /weight-records/latest/{petId}
///
/// Get the most recent weight record for a pet.
pub async fn get_latest(
    State(state): State<AppState>,
    Path(pet_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let record = WeightRecordRepo::find_latest_by_pet(&state.pool, pet_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WeightRecord",
            id: pet_id,
        }))?;

    Ok(Json(DataResponse { data: record }))
}

/// GET /weight-records/{id}
///
/// Get a single weight record by ID.
pub async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let record = WeightRecordRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WeightRecord",
            id,
        }))?;

    Ok(Json(DataResponse { data: record }))
}

/// POST /weight-records
///
/// Create a new weight record.
pub async fn create_record(
    State(state): State<AppState>,
    Json(input): Json<CreateWeightRecord>,
) -> AppResult<impl IntoResponse> {
    validate_weight(input.weight).map_err(AppError::BadRequest)?;
    if let Some(ref notes) = input.notes {
        validate_notes(notes).map_err(AppError::BadRequest)?;
    }

    let record = WeightRecordRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::reference("INVALID_PET", "Invalid pet ID"))?;

    tracing::info!(
        record_id = record.id,
        pet_id = record.pet_id,
        weight = record.weight,
        "Weight record created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// PUT /weight-records/{id}
///
/// Update a weight record. Absent fields are left untouched.
pub async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWeightRecord>,
) -> AppResult<impl IntoResponse> {
    if let Some(weight) = input.weight {
        validate_weight(weight).map_err(AppError::BadRequest)?;
    }
    if let Some(Some(ref notes)) = input.notes {
        validate_notes(notes).map_err(AppError::BadRequest)?;
    }

    let record = WeightRecordRepo::update(&state.pool, id, &input)
        .await
        .map_err(AppError::reference("INVALID_PET", "Invalid pet ID"))?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WeightRecord",
            id,
        }))?;

    tracing::info!(record_id = id, "Weight record updated");

    Ok(Json(DataResponse { data: record }))
}

/// DELETE /weight-records/{id}
///
/// Delete a weight record.
pub async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = WeightRecordRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "WeightRecord",
            id,
        }));
    }

    tracing::info!(record_id = id, "Weight record deleted");

    Ok(StatusCode::NO_CONTENT)
}
