//! Handlers for maintenance record CRUD, statistics, and CSV export.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;

use pettrack_core::error::CoreError;
use pettrack_core::maintenance::{
    validate_description, validate_kind, validate_recent_days, DEFAULT_RECENT_DAYS,
};
use pettrack_core::types::DbId;
use pettrack_db::models::maintenance_record::{CreateMaintenanceRecord, UpdateMaintenanceRecord};
use pettrack_db::repositories::MaintenanceRecordRepo;

use crate::csv;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for listing and exporting maintenance records.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceListParams {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Query parameters for recent maintenance records.
#[derive(Debug, serde::Deserialize)]
pub struct RecentParams {
    pub days: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Query parameters for maintenance statistics.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceStatsParams {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// GET /maintenance-records?type=&startDate=&endDate=
///
/// List maintenance records, newest first, optionally filtered by kind.
/// With both date bounds supplied the list is restricted to that range
/// (inclusive).
pub async fn list_records(
    State(state): State<AppState>,
    Query(params): Query<MaintenanceListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref kind) = params.kind {
        validate_kind(kind).map_err(AppError::BadRequest)?;
    }

    let records = match (params.start_date, params.end_date) {
        (Some(start), Some(end)) => {
            MaintenanceRecordRepo::find_by_date_range(&state.pool, start, end, params.kind.as_deref())
                .await?
        }
        _ => MaintenanceRecordRepo::find_all(&state.pool, params.kind.as_deref()).await?,
    };

    Ok(Json(DataResponse { data: records }))
}

/// GET /maintenance-records/recent?days=&type=
///
/// List maintenance records from the last N days (default 7).
pub async fn list_recent(
    State(state): State<AppState>,
    Query(params): Query<RecentParams>,
) -> AppResult<impl IntoResponse> {
    let days = params.days.unwrap_or(DEFAULT_RECENT_DAYS);
    validate_recent_days(days).map_err(AppError::BadRequest)?;
    if let Some(ref kind) = params.kind {
        validate_kind(kind).map_err(AppError::BadRequest)?;
    }

    let records =
        MaintenanceRecordRepo::find_recent(&state.pool, days, params.kind.as_deref()).await?;

    Ok(Json(DataResponse { data: records }))
}

/// GET /maintenance-records/stats?startDate=&endDate=
///
/// Per-kind counts for a date range. Both bounds are required.
pub async fn get_stats(
    State(state): State<AppState>,
    Query(params): Query<MaintenanceStatsParams>,
) -> AppResult<impl IntoResponse> {
    let (start, end) = match (params.start_date, params.end_date) {
        (Some(start), Some(end)) => (start, end),
        _ => {
            return Err(AppError::BadRequest(
                "Both startDate and endDate are required for statistics".to_string(),
            ))
        }
    };

    let stats = MaintenanceRecordRepo::stats(&state.pool, start, end).await?;

    Ok(Json(DataResponse { data: stats }))
}

/// GET /maintenance-records/export?type=&startDate=&endDate=
///
/// Download maintenance records as CSV, optionally filtered by kind and
/// date range.
pub async fn export_records(
    State(state): State<AppState>,
    Query(params): Query<MaintenanceListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref kind) = params.kind {
        validate_kind(kind).map_err(AppError::BadRequest)?;
    }

    let records = match (params.start_date, params.end_date) {
        (Some(start), Some(end)) => {
            MaintenanceRecordRepo::find_by_date_range(&state.pool, start, end, params.kind.as_deref())
                .await?
        }
        _ => MaintenanceRecordRepo::find_all(&state.pool, params.kind.as_deref()).await?,
    };

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            vec![
                record.id.to_string(),
                csv::escape(&record.kind),
                csv::escape(&record.performed_at.to_rfc3339()),
                record
                    .description
                    .as_deref()
                    .map(csv::escape)
                    .unwrap_or_default(),
                csv::escape(&record.created_at.to_rfc3339()),
            ]
        })
        .collect();

    let body = csv::document(
        &["ID", "Type", "Performed At", "Description", "Created At"],
        &rows,
    );

    let range_label = |date: Option<NaiveDate>| {
        date.map(|d| d.to_string()).unwrap_or_else(|| "all".into())
    };
    let filename = format!(
        "maintenance_records_{}_{}.csv",
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

/// GET /maintenance-records/{id}
///
/// Get a single maintenance record by ID.
pub async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let record = MaintenanceRecordRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MaintenanceRecord",
            id,
        }))?;

    Ok(Json(DataResponse { data: record }))
}

/// POST /maintenance-records
///
/// Create a new maintenance record.
pub async fn create_record(
    State(state): State<AppState>,
    Json(input): Json<CreateMaintenanceRecord>,
) -> AppResult<impl IntoResponse> {
    validate_kind(&input.kind).map_err(AppError::BadRequest)?;
    if let Some(ref description) = input.description {
        validate_description(description).map_err(AppError::BadRequest)?;
    }

    let record = MaintenanceRecordRepo::create(&state.pool, &input).await?;

    tracing::info!(
        record_id = record.id,
        kind = %record.kind,
        "Maintenance record created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// PUT /maintenance-records/{id}
///
/// Update a maintenance record. Absent fields are left untouched.
pub async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMaintenanceRecord>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref kind) = input.kind {
        validate_kind(kind).map_err(AppError::BadRequest)?;
    }
    if let Some(Some(ref description)) = input.description {
        validate_description(description).map_err(AppError::BadRequest)?;
    }

    let record = MaintenanceRecordRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MaintenanceRecord",
            id,
        }))?;

    tracing::info!(record_id = id, "Maintenance record updated");

    Ok(Json(DataResponse { data: record }))
}

/// DELETE /maintenance-records/{id}
///
/// Delete a maintenance record.
pub async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = MaintenanceRecordRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "MaintenanceRecord",
            id,
        }));
    }

    tracing::info!(record_id = id, "Maintenance record deleted");

    Ok(StatusCode::NO_CONTENT)
}
