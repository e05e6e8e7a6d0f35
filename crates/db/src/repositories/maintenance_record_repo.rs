//! Repository for the `maintenance_records` table.

use chrono::NaiveDate;
use pettrack_core::maintenance::{KIND_TOILET, KIND_WATER};
use pettrack_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::maintenance_record::{
    CreateMaintenanceRecord, MaintenanceRecord, MaintenanceStats, UpdateMaintenanceRecord,
};

/// Column list for maintenance_records queries.
const COLUMNS: &str = "id, type, performed_at, description, created_at";

/// Provides CRUD and aggregation operations for maintenance records.
pub struct MaintenanceRecordRepo;

impl MaintenanceRecordRepo {
    /// Create a new maintenance record, returning the stored row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateMaintenanceRecord,
    ) -> Result<MaintenanceRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO maintenance_records (type, performed_at, description)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaintenanceRecord>(&query)
            .bind(&input.kind)
            .bind(input.performed_at)
            .bind(input.description.as_deref().filter(|s| !s.is_empty()))
            .fetch_one(pool)
            .await
    }

    /// Find a maintenance record by its ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<MaintenanceRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM maintenance_records WHERE id = ?1");
        sqlx::query_as::<_, MaintenanceRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List maintenance records, newest first, optionally filtered by kind.
    pub async fn find_all(
        pool: &SqlitePool,
        kind: Option<&str>,
    ) -> Result<Vec<MaintenanceRecord>, sqlx::Error> {
        if let Some(kind) = kind {
            let query = format!(
                "SELECT {COLUMNS} FROM maintenance_records
                 WHERE type = ?1
                 ORDER BY performed_at DESC"
            );
            sqlx::query_as::<_, MaintenanceRecord>(&query)
                .bind(kind)
                .fetch_all(pool)
                .await
        } else {
            let query = format!(
                "SELECT {COLUMNS} FROM maintenance_records
                 ORDER BY performed_at DESC"
            );
            sqlx::query_as::<_, MaintenanceRecord>(&query)
                .fetch_all(pool)
                .await
        }
    }

    /// List maintenance records performed on a calendar date between
    /// `start_date` and `end_date` (inclusive bounds), optionally filtered
    /// by kind.
    pub async fn find_by_date_range(
        pool: &SqlitePool,
        start_date: NaiveDate,
        end_date: NaiveDate,
        kind: Option<&str>,
    ) -> Result<Vec<MaintenanceRecord>, sqlx::Error> {
        if let Some(kind) = kind {
            let query = format!(
                "SELECT {COLUMNS} FROM maintenance_records
                 WHERE date(performed_at) BETWEEN ?1 AND ?2 AND type = ?3
                 ORDER BY performed_at DESC"
            );
            sqlx::query_as::<_, MaintenanceRecord>(&query)
                .bind(start_date)
                .bind(end_date)
                .bind(kind)
                .fetch_all(pool)
                .await
        } else {
            let query = format!(
                "SELECT {COLUMNS} FROM maintenance_records
                 WHERE date(performed_at) BETWEEN ?1 AND ?2
                 ORDER BY performed_at DESC"
            );
            sqlx::query_as::<_, MaintenanceRecord>(&query)
                .bind(start_date)
                .bind(end_date)
                .fetch_all(pool)
                .await
        }
    }

    /// List maintenance records from the last `days` days (against the
    /// current clock), optionally filtered by kind. The day count is bound
    /// as a parameter, never spliced into the query text.
    pub async fn find_recent(
        pool: &SqlitePool,
        days: i64,
        kind: Option<&str>,
    ) -> Result<Vec<MaintenanceRecord>, sqlx::Error> {
        if let Some(kind) = kind {
            let query = format!(
                "SELECT {COLUMNS} FROM maintenance_records
                 WHERE date(performed_at) >= date('now', '-' || ?1 || ' days') AND type = ?2
                 ORDER BY performed_at DESC"
            );
            sqlx::query_as::<_, MaintenanceRecord>(&query)
                .bind(days)
                .bind(kind)
                .fetch_all(pool)
                .await
        } else {
            let query = format!(
                "SELECT {COLUMNS} FROM maintenance_records
                 WHERE date(performed_at) >= date('now', '-' || ?1 || ' days')
                 ORDER BY performed_at DESC"
            );
            sqlx::query_as::<_, MaintenanceRecord>(&query)
                .bind(days)
                .fetch_all(pool)
                .await
        }
    }

    /// Per-kind counts over a date range (inclusive bounds). Kinds with no
    /// events report 0.
    pub async fn stats(
        pool: &SqlitePool,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<MaintenanceStats, sqlx::Error> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            "SELECT type, COUNT(*) FROM maintenance_records
             WHERE date(performed_at) BETWEEN ?1 AND ?2
             GROUP BY type",
        )
        .bind(start_date)
        .bind(end_date)
        .fetch_all(pool)
        .await?;

        let mut stats = MaintenanceStats {
            water: 0,
            toilet: 0,
            total: 0,
        };
        for (kind, count) in rows {
            match kind.as_str() {
                KIND_WATER => stats.water = count,
                KIND_TOILET => stats.toilet = count,
                _ => {}
            }
            stats.total += count;
        }
        Ok(stats)
    }

    /// Update a maintenance record by ID, returning the updated row.
    ///
    /// Maintenance records carry no `updated_at`; patches do not stamp one.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateMaintenanceRecord,
    ) -> Result<Option<MaintenanceRecord>, sqlx::Error> {
        if input.is_empty() {
            return Self::find_by_id(pool, id).await;
        }

        let description = input
            .description
            .as_ref()
            .map(|inner| inner.as_deref().filter(|s| !s.is_empty()));

        let query = format!(
            "UPDATE maintenance_records SET
                type = COALESCE(?2, type),
                performed_at = COALESCE(?3, performed_at),
                description = CASE WHEN ?4 THEN ?5 ELSE description END
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaintenanceRecord>(&query)
            .bind(id)
            .bind(&input.kind)
            .bind(input.performed_at)
            .bind(description.is_some())
            .bind(description.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Delete a maintenance record by ID. Returns `true` if a row was
    /// deleted.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM maintenance_records WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
