//! Repository for the `feeding_schedules` table.
//!
//! Reads hydrate the referenced food type through a LEFT JOIN; a dangling
//! reference yields the schedule with `food_type` absent.

use pettrack_core::types::DbId;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::models::feeding_schedule::{
    CreateFeedingSchedule, FeedingSchedule, UpdateFeedingSchedule,
};
use crate::models::food_type::FoodType;

/// Aliased column list for hydrated feeding schedule queries. Shared with
/// the feeding record repository, which nests the same shape one level down.
pub(crate) const SCHEDULE_COLUMNS: &str =
    "fs.id AS fs_id, fs.time AS fs_time, fs.food_type_id AS fs_food_type_id, \
     fs.is_active AS fs_is_active, fs.created_at AS fs_created_at, fs.updated_at AS fs_updated_at, \
     ft.id AS ft_id, ft.name AS ft_name, ft.brand AS ft_brand, ft.description AS ft_description, \
     ft.created_at AS ft_created_at, ft.updated_at AS ft_updated_at";

/// Map one `fs_*`/`ft_*` aliased row to a hydrated [`FeedingSchedule`].
///
/// The single mapping point for this entity: every query that returns a
/// schedule goes through here, so boolean and optional-column coercions
/// happen exactly once.
pub(crate) fn map_schedule_row(row: &SqliteRow) -> Result<FeedingSchedule, sqlx::Error> {
    let food_type = match row.try_get::<Option<DbId>, _>("ft_id")? {
        Some(id) => Some(FoodType {
            id,
            name: row.try_get("ft_name")?,
            brand: row.try_get("ft_brand")?,
            description: row.try_get("ft_description")?,
            created_at: row.try_get("ft_created_at")?,
            updated_at: row.try_get("ft_updated_at")?,
        }),
        None => None,
    };

    Ok(FeedingSchedule {
        id: row.try_get("fs_id")?,
        time: row.try_get("fs_time")?,
        food_type_id: row.try_get("fs_food_type_id")?,
        is_active: row.try_get("fs_is_active")?,
        created_at: row.try_get("fs_created_at")?,
        updated_at: row.try_get("fs_updated_at")?,
        food_type,
    })
}

/// Provides CRUD operations for feeding schedules.
pub struct FeedingScheduleRepo;

impl FeedingScheduleRepo {
    /// Create a new feeding schedule, returning the stored row hydrated
    /// with its food type.
    ///
    /// Fails with a foreign-key violation when `food_type_id` does not
    /// reference an existing food type; nothing is persisted in that case.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateFeedingSchedule,
    ) -> Result<FeedingSchedule, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO feeding_schedules (time, food_type_id, is_active)
             VALUES (?1, ?2, ?3)",
        )
        .bind(&input.time)
        .bind(input.food_type_id)
        .bind(input.is_active.unwrap_or(true))
        .execute(pool)
        .await?;

        Self::find_by_id(pool, result.last_insert_rowid())
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Find a feeding schedule by its ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<FeedingSchedule>, sqlx::Error> {
        let query = format!(
            "SELECT {SCHEDULE_COLUMNS}
             FROM feeding_schedules fs
             LEFT JOIN food_types ft ON fs.food_type_id = ft.id
             WHERE fs.id = ?1"
        );
        let row = sqlx::query(&query).bind(id).fetch_optional(pool).await?;
        row.as_ref().map(map_schedule_row).transpose()
    }

    /// List all feeding schedules ordered by scheduled time.
    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<FeedingSchedule>, sqlx::Error> {
        let query = format!(
            "SELECT {SCHEDULE_COLUMNS}
             FROM feeding_schedules fs
             LEFT JOIN food_types ft ON fs.food_type_id = ft.id
             ORDER BY fs.time ASC"
        );
        let rows = sqlx::query(&query).fetch_all(pool).await?;
        rows.iter().map(map_schedule_row).collect()
    }

    /// List active feeding schedules ordered by scheduled time.
    pub async fn find_active(pool: &SqlitePool) -> Result<Vec<FeedingSchedule>, sqlx::Error> {
        let query = format!(
            "SELECT {SCHEDULE_COLUMNS}
             FROM feeding_schedules fs
             LEFT JOIN food_types ft ON fs.food_type_id = ft.id
             WHERE fs.is_active = 1
             ORDER BY fs.time ASC"
        );
        let rows = sqlx::query(&query).fetch_all(pool).await?;
        rows.iter().map(map_schedule_row).collect()
    }

    /// Update a feeding schedule by ID, returning the updated hydrated row.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateFeedingSchedule,
    ) -> Result<Option<FeedingSchedule>, sqlx::Error> {
        if input.is_empty() {
            return Self::find_by_id(pool, id).await;
        }

        let result = sqlx::query(
            "UPDATE feeding_schedules SET
                time = COALESCE(?2, time),
                food_type_id = COALESCE(?3, food_type_id),
                is_active = COALESCE(?4, is_active),
                updated_at = datetime('now')
             WHERE id = ?1",
        )
        .bind(id)
        .bind(&input.time)
        .bind(input.food_type_id)
        .bind(input.is_active)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Self::find_by_id(pool, id).await
    }

    /// Delete a feeding schedule by ID. Returns `true` if a row was deleted.
    ///
    /// Fails with a foreign-key violation while any feeding record still
    /// references the schedule.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM feeding_schedules WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
