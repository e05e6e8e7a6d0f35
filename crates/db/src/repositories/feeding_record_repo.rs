//! Repository for the `feeding_records` table.
//!
//! Reads hydrate two levels: the referenced schedule, and that schedule's
//! food type. Date-range queries compare the calendar date portion of
//! `actual_time` inclusively on both bounds.

use chrono::NaiveDate;
use pettrack_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use pettrack_core::stats::completion_percentage;
use pettrack_core::types::DbId;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::models::feeding_record::{
    CompletionRate, CreateFeedingRecord, FeedingRecord, UpdateFeedingRecord,
};
use crate::repositories::feeding_schedule_repo::{map_schedule_row, SCHEDULE_COLUMNS};

/// Unaliased record columns; schedule and food type columns come from
/// [`SCHEDULE_COLUMNS`] so the nested mapper can be reused as-is.
const RECORD_COLUMNS: &str =
    "fr.id, fr.feeding_schedule_id, fr.actual_time, fr.completed, fr.notes, fr.created_at";

/// Shared FROM/JOIN clause for hydrated record queries.
const FROM_JOINED: &str = "FROM feeding_records fr
     LEFT JOIN feeding_schedules fs ON fr.feeding_schedule_id = fs.id
     LEFT JOIN food_types ft ON fs.food_type_id = ft.id";

/// Map one joined row to a hydrated [`FeedingRecord`].
fn map_record_row(row: &SqliteRow) -> Result<FeedingRecord, sqlx::Error> {
    let feeding_schedule = match row.try_get::<Option<DbId>, _>("fs_id")? {
        Some(_) => Some(map_schedule_row(row)?),
        None => None,
    };

    Ok(FeedingRecord {
        id: row.try_get("id")?,
        feeding_schedule_id: row.try_get("feeding_schedule_id")?,
        actual_time: row.try_get("actual_time")?,
        completed: row.try_get("completed")?,
        notes: row.try_get("notes")?,
        created_at: row.try_get("created_at")?,
        feeding_schedule,
    })
}

/// Provides CRUD and aggregation operations for feeding records.
pub struct FeedingRecordRepo;

impl FeedingRecordRepo {
    /// Create a new feeding record, returning the stored row hydrated with
    /// its schedule and food type.
    ///
    /// Fails with a foreign-key violation when `feeding_schedule_id` does
    /// not reference an existing schedule; nothing is persisted then.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateFeedingRecord,
    ) -> Result<FeedingRecord, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO feeding_records (feeding_schedule_id, actual_time, completed, notes)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(input.feeding_schedule_id)
        .bind(input.actual_time)
        .bind(input.completed)
        .bind(input.notes.as_deref().filter(|s| !s.is_empty()))
        .execute(pool)
        .await?;

        Self::find_by_id(pool, result.last_insert_rowid())
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Find a feeding record by its ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<FeedingRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {RECORD_COLUMNS}, {SCHEDULE_COLUMNS}
             {FROM_JOINED}
             WHERE fr.id = ?1"
        );
        let row = sqlx::query(&query).bind(id).fetch_optional(pool).await?;
        row.as_ref().map(map_record_row).transpose()
    }

    /// List feeding records, newest actual time first.
    pub async fn find_all(
        pool: &SqlitePool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<FeedingRecord>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        let offset = clamp_offset(offset);
        let query = format!(
            "SELECT {RECORD_COLUMNS}, {SCHEDULE_COLUMNS}
             {FROM_JOINED}
             ORDER BY fr.actual_time DESC
             LIMIT ?1 OFFSET ?2"
        );
        let rows = sqlx::query(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;
        rows.iter().map(map_record_row).collect()
    }

    /// List feeding records whose `actual_time` falls on a calendar date
    /// between `start_date` and `end_date`, inclusive on both bounds.
    pub async fn find_by_date_range(
        pool: &SqlitePool,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<FeedingRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {RECORD_COLUMNS}, {SCHEDULE_COLUMNS}
             {FROM_JOINED}
             WHERE date(fr.actual_time) BETWEEN ?1 AND ?2
             ORDER BY fr.actual_time DESC"
        );
        let rows = sqlx::query(&query)
            .bind(start_date)
            .bind(end_date)
            .fetch_all(pool)
            .await?;
        rows.iter().map(map_record_row).collect()
    }

    /// Completion statistics over a date range (inclusive bounds).
    ///
    /// An empty range yields `{total: 0, completed: 0, rate: 0}`.
    pub async fn completion_rate(
        pool: &SqlitePool,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<CompletionRate, sqlx::Error> {
        let (total, completed): (i64, Option<i64>) = sqlx::query_as(
            "SELECT COUNT(*), SUM(CASE WHEN completed = 1 THEN 1 ELSE 0 END)
             FROM feeding_records
             WHERE date(actual_time) BETWEEN ?1 AND ?2",
        )
        .bind(start_date)
        .bind(end_date)
        .fetch_one(pool)
        .await?;

        let completed = completed.unwrap_or(0);
        Ok(CompletionRate {
            total,
            completed,
            rate: completion_percentage(completed, total),
        })
    }

    /// Update a feeding record by ID, returning the updated hydrated row.
    ///
    /// Feeding records carry no `updated_at`; patches do not stamp one.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateFeedingRecord,
    ) -> Result<Option<FeedingRecord>, sqlx::Error> {
        if input.is_empty() {
            return Self::find_by_id(pool, id).await;
        }

        let notes = input
            .notes
            .as_ref()
            .map(|inner| inner.as_deref().filter(|s| !s.is_empty()));

        let result = sqlx::query(
            "UPDATE feeding_records SET
                feeding_schedule_id = COALESCE(?2, feeding_schedule_id),
                actual_time = COALESCE(?3, actual_time),
                completed = COALESCE(?4, completed),
                notes = CASE WHEN ?5 THEN ?6 ELSE notes END
             WHERE id = ?1",
        )
        .bind(id)
        .bind(input.feeding_schedule_id)
        .bind(input.actual_time)
        .bind(input.completed)
        .bind(notes.is_some())
        .bind(notes.flatten())
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Self::find_by_id(pool, id).await
    }

    /// Delete a feeding record by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM feeding_records WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
