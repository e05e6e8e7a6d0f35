//! Repository for the `weight_records` table.
//!
//! Reads hydrate the owning pet through a LEFT JOIN.

use chrono::NaiveDate;
use pettrack_core::types::DbId;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::models::pet::Pet;
use crate::models::weight_record::{CreateWeightRecord, UpdateWeightRecord, WeightRecord};

/// Aliased column list for hydrated weight record queries.
const COLUMNS: &str = "wr.id, wr.pet_id, wr.weight, wr.recorded_date, wr.notes, wr.created_at, \
     p.id AS p_id, p.name AS p_name, p.species AS p_species, p.birth_date AS p_birth_date, \
     p.created_at AS p_created_at, p.updated_at AS p_updated_at";

/// Shared FROM/JOIN clause for hydrated weight record queries.
const FROM_JOINED: &str = "FROM weight_records wr
     LEFT JOIN pets p ON wr.pet_id = p.id";

/// Map one joined row to a hydrated [`WeightRecord`].
fn map_weight_row(row: &SqliteRow) -> Result<WeightRecord, sqlx::Error> {
    let pet = match row.try_get::<Option<DbId>, _>("p_id")? {
        Some(id) => Some(Pet {
            id,
            name: row.try_get("p_name")?,
            species: row.try_get("p_species")?,
            birth_date: row.try_get("p_birth_date")?,
            created_at: row.try_get("p_created_at")?,
            updated_at: row.try_get("p_updated_at")?,
        }),
        None => None,
    };

    Ok(WeightRecord {
        id: row.try_get("id")?,
        pet_id: row.try_get("pet_id")?,
        weight: row.try_get("weight")?,
        recorded_date: row.try_get("recorded_date")?,
        notes: row.try_get("notes")?,
        created_at: row.try_get("created_at")?,
        pet,
    })
}

/// Provides CRUD operations for weight records.
pub struct WeightRecordRepo;

impl WeightRecordRepo {
    /// Create a new weight record, returning the stored row hydrated with
    /// its pet.
    ///
    /// Fails with a foreign-key violation when `pet_id` does not reference
    /// an existing pet; nothing is persisted then.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateWeightRecord,
    ) -> Result<WeightRecord, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO weight_records (pet_id, weight, recorded_date, notes)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(input.pet_id)
        .bind(input.weight)
        .bind(input.recorded_date)
        .bind(input.notes.as_deref().filter(|s| !s.is_empty()))
        .execute(pool)
        .await?;

        Self::find_by_id(pool, result.last_insert_rowid())
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Find a weight record by its ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<WeightRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM_JOINED} WHERE wr.id = ?1");
        let row = sqlx::query(&query).bind(id).fetch_optional(pool).await?;
        row.as_ref().map(map_weight_row).transpose()
    }

    /// List weight records, newest measurement first, optionally filtered
    /// to one pet.
    pub async fn find_all(
        pool: &SqlitePool,
        pet_id: Option<DbId>,
    ) -> Result<Vec<WeightRecord>, sqlx::Error> {
        let rows = if let Some(pet_id) = pet_id {
            let query = format!(
                "SELECT {COLUMNS} {FROM_JOINED}
                 WHERE wr.pet_id = ?1
                 ORDER BY wr.recorded_date DESC, wr.created_at DESC"
            );
            sqlx::query(&query).bind(pet_id).fetch_all(pool).await?
        } else {
            let query = format!(
                "SELECT {COLUMNS} {FROM_JOINED}
                 ORDER BY wr.recorded_date DESC, wr.created_at DESC"
            );
            sqlx::query(&query).fetch_all(pool).await?
        };
        rows.iter().map(map_weight_row).collect()
    }

    /// List one pet's weight records within a date range (inclusive bounds),
    /// oldest first for charting.
    pub async fn find_by_pet_and_date_range(
        pool: &SqlitePool,
        pet_id: DbId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<WeightRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} {FROM_JOINED}
             WHERE wr.pet_id = ?1 AND wr.recorded_date BETWEEN ?2 AND ?3
             ORDER BY wr.recorded_date ASC"
        );
        let rows = sqlx::query(&query)
            .bind(pet_id)
            .bind(start_date)
            .bind(end_date)
            .fetch_all(pool)
            .await?;
        rows.iter().map(map_weight_row).collect()
    }

    /// Find the most recent weight record for a pet, by recorded date then
    /// creation time.
    pub async fn find_latest_by_pet(
        pool: &SqlitePool,
        pet_id: DbId,
    ) -> Result<Option<WeightRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} {FROM_JOINED}
             WHERE wr.pet_id = ?1
             ORDER BY wr.recorded_date DESC, wr.created_at DESC
             LIMIT 1"
        );
        let row = sqlx::query(&query)
            .bind(pet_id)
            .fetch_optional(pool)
            .await?;
        row.as_ref().map(map_weight_row).transpose()
    }

    /// Update a weight record by ID, returning the updated hydrated row.
    ///
    /// Weight records carry no `updated_at`; patches do not stamp one.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateWeightRecord,
    ) -> Result<Option<WeightRecord>, sqlx::Error> {
        if input.is_empty() {
            return Self::find_by_id(pool, id).await;
        }

        let notes = input
            .notes
            .as_ref()
            .map(|inner| inner.as_deref().filter(|s| !s.is_empty()));

        let result = sqlx::query(
            "UPDATE weight_records SET
                pet_id = COALESCE(?2, pet_id),
                weight = COALESCE(?3, weight),
                recorded_date = COALESCE(?4, recorded_date),
                notes = CASE WHEN ?5 THEN ?6 ELSE notes END
             WHERE id = ?1",
        )
        .bind(id)
        .bind(input.pet_id)
        .bind(input.weight)
        .bind(input.recorded_date)
        .bind(notes.is_some())
        .bind(notes.flatten())
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Self::find_by_id(pool, id).await
    }

    /// Delete a weight record by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM weight_records WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
