//! Handlers for feeding schedule CRUD.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use pettrack_core::error::CoreError;
use pettrack_core::feeding::validate_schedule_time;
use pettrack_core::types::DbId;
use pettrack_db::models::feeding_schedule::{CreateFeedingSchedule, UpdateFeedingSchedule};
use pettrack_db::repositories::FeedingScheduleRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for listing feeding schedules.
#[derive(Debug, serde::Deserialize)]
pub struct ScheduleListParams {
    /// When true, only active schedules are returned.
    pub active: Option<bool>,
}

/// GET /feeding-schedules?active=
///
/// List feeding schedules ordered by scheduled time, optionally filtered
/// to active ones.
pub async fn list_schedules(
    State(state): State<AppState>,
    Query(params): Query<ScheduleListParams>,
) -> AppResult<impl IntoResponse> {
    let schedules = if params.active == Some(true) {
        FeedingScheduleRepo::find_active(&state.pool).await?
    } else {
        FeedingScheduleRepo::find_all(&state.pool).await?
    };

    Ok(Json(DataResponse { data: schedules }))
}

/// GET /feeding-schedules/{id}
///
/// Get a single feeding schedule by ID.
pub async fn get_schedule(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let schedule = FeedingScheduleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FeedingSchedule",
            id,
        }))?;

    Ok(Json(DataResponse { data: schedule }))
}

/// POST /feeding-schedules
///
/// Create a new feeding schedule.
pub async fn create_schedule(
    State(state): State<AppState>,
    Json(input): Json<CreateFeedingSchedule>,
) -> AppResult<impl IntoResponse> {
    validate_schedule_time(&input.time).map_err(AppError::BadRequest)?;

    let schedule = FeedingScheduleRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::reference(
            "INVALID_FOOD_TYPE",
            "Invalid food type ID",
        ))?;

    tracing::info!(
        schedule_id = schedule.id,
        time = %schedule.time,
        "Feeding schedule created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: schedule })))
}

/// PUT /feeding-schedules/{id}
///
/// Update a feeding schedule. Absent fields are left untouched.
pub async fn update_schedule(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFeedingSchedule>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref time) = input.time {
        validate_schedule_time(time).map_err(AppError::BadRequest)?;
    }

    let schedule = FeedingScheduleRepo::update(&state.pool, id, &input)
        .await
        .map_err(AppError::reference(
            "INVALID_FOOD_TYPE",
            "Invalid food type ID",
        ))?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FeedingSchedule",
            id,
        }))?;

    tracing::info!(schedule_id = id, "Feeding schedule updated");

    Ok(Json(DataResponse { data: schedule }))
}

/// DELETE /feeding-schedules/{id}
///
/// Delete a feeding schedule. Blocked while feeding records still
/// reference it.
pub async fn delete_schedule(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = FeedingScheduleRepo::delete(&state.pool, id)
        .await
        .map_err(AppError::delete_blocked(
            "FEEDING_SCHEDULE_IN_USE",
            "Feeding schedule still has feeding records and cannot be deleted",
        ))?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "FeedingSchedule",
            id,
        }));
    }

    tracing::info!(schedule_id = id, "Feeding schedule deleted");

    Ok(StatusCode::NO_CONTENT)
}
