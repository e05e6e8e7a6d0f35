//! Handlers for feeding record CRUD, completion statistics, and CSV export.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;

use pettrack_core::error::CoreError;
use pettrack_core::feeding::validate_notes;
use pettrack_core::types::DbId;
use pettrack_db::models::feeding_record::{CreateFeedingRecord, UpdateFeedingRecord};
use pettrack_db::repositories::FeedingRecordRepo;

use crate::csv;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for listing and exporting feeding records.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordListParams {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query parameters for completion statistics.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsParams {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// GET /feeding-records?startDate=&endDate=&limit=&offset=
///
/// List feeding records, newest first. With both date bounds supplied the
/// list is restricted to that range (inclusive).
pub async fn list_records(
    State(state): State<AppState>,
    Query(params): Query<RecordListParams>,
) -> AppResult<impl IntoResponse> {
    let records = match (params.start_date, params.end_date) {
        (Some(start), Some(end)) => {
            FeedingRecordRepo::find_by_date_range(&state.pool, start, end).await?
        }
        _ => FeedingRecordRepo::find_all(&state.pool, params.limit, params.offset).await?,
    };

    Ok(Json(DataResponse { data: records }))
}

/// GET /feeding-records/stats?startDate=&endDate=
///
/// Completion statistics for a date range. Both bounds are required.
pub async fn get_stats(
    State(state): State<AppState>,
    Query(params): Query<StatsParams>,
) -> AppResult<impl IntoResponse> {
    let (start, end) = match (params.start_date, params.end_date) {
        (Some(start), Some(end)) => (start, end),
        _ => {
            return Err(AppError::BadRequest(
                "Both startDate and endDate are required for statistics".to_string(),
            ))
        }
    };

    let stats = FeedingRecordRepo::completion_rate(&state.pool, start, end).await?;

    Ok(Json(DataResponse { data: stats }))
}

/// GET /feeding-records/export?startDate=&endDate=
///
/// Download feeding records as CSV, optionally restricted to a date range.
pub async fn export_records(
    State(state): State<AppState>,
    Query(params): Query<RecordListParams>,
) -> AppResult<impl IntoResponse> {
    let records = match (params.start_date, params.end_date) {
        (Some(start), Some(end)) => {
            FeedingRecordRepo::find_by_date_range(&state.pool, start, end).await?
        }
        _ => FeedingRecordRepo::find_all(&state.pool, None, None).await?,
    };

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            let schedule_time = record
                .feeding_schedule
                .as_ref()
                .map(|s| s.time.as_str())
                .unwrap_or("unknown");
            let food_type_name = record
                .feeding_schedule
                .as_ref()
                .and_then(|s| s.food_type.as_ref())
                .map(|f| f.name.as_str())
                .unwrap_or("unknown");
            let completed = if record.completed {
                "completed"
            } else {
                "incomplete"
            };

            vec![
                record.id.to_string(),
                csv::escape(&record.actual_time.to_rfc3339()),
                csv::escape(schedule_time),
                csv::escape(food_type_name),
                csv::escape(completed),
                record.notes.as_deref().map(csv::escape).unwrap_or_default(),
                csv::escape(&record.created_at.to_rfc3339()),
            ]
        })
        .collect();

    let body = csv::document(
        &[
            "ID",
            "Actual Time",
            "Scheduled Time",
            "Food Type",
            "Completed",
            "Notes",
            "Created At",
        ],
        &rows,
    );

    let range_label = |date: Option<NaiveDate>| {
        date.map(|d| d.to_string()).unwrap_or_else(|| "all".into())
    };
    let filename = format!(
        "feeding_records_{}_{}.csv",
        range_label(params.start_date),
        range_label(params.end_date)
    );

    Ok((
        [
            ("content-type", "text/csv; charset=utf-8".to_string()),
            (
                "content-disposition",
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    ))
}

/// GET /feeding-records/{id}
///
/// Get a single feeding record by ID.
pub async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let record = FeedingRecordRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FeedingRecord",
            id,
        }))?;

    Ok(Json(DataResponse { data: record }))
}

/// POST /feeding-records
///
/// Create a new feeding record.
pub async fn create_record(
    State(state): State<AppState>,
    Json(input): Json<CreateFeedingRecord>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref notes) = input.notes {
        validate_notes(notes).map_err(AppError::BadRequest)?;
    }

    let record = FeedingRecordRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::reference(
            "INVALID_FEEDING_SCHEDULE",
            "Invalid feeding schedule ID",
        ))?;

    tracing::info!(
        record_id = record.id,
        schedule_id = record.feeding_schedule_id,
        completed = record.completed,
        "Feeding record created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// PUT /feeding-records/{id}
///
/// Update a feeding record. Absent fields are left untouched.
pub async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFeedingRecord>,
) -> AppResult<impl IntoResponse> {
    if let Some(Some(ref notes)) = input.notes {
        validate_notes(notes).map_err(AppError::BadRequest)?;
    }

    let record = FeedingRecordRepo::update(&state.pool, id, &input)
        .await
        .map_err(AppError::reference(
            "INVALID_FEEDING_SCHEDULE",
            "Invalid feeding schedule ID",
        ))?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FeedingRecord",
            id,
        }))?;

    tracing::info!(record_id = id, "Feeding record updated");

    Ok(Json(DataResponse { data: record }))
}

/// DELETE /feeding-records/{id}
///
/// Delete a feeding record.
pub async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = FeedingRecordRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "FeedingRecord",
            id,
        }));
    }

    tracing::info!(record_id = id, "Feeding record deleted");

    Ok(StatusCode::NO_CONTENT)
}
