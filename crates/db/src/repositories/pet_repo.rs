//! Repository for the `pets` table.

use pettrack_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::pet::{CreatePet, Pet, UpdatePet};

/// Column list for pets queries.
const COLUMNS: &str = "id, name, species, birth_date, created_at, updated_at";

/// Provides CRUD operations for pets.
pub struct PetRepo;

impl PetRepo {
    /// Create a new pet, returning the stored row.
    pub async fn create(pool: &SqlitePool, input: &CreatePet) -> Result<Pet, sqlx::Error> {
        let query = format!(
            "INSERT INTO pets (name, species, birth_date)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(&input.name)
            .bind(&input.species)
            .bind(input.birth_date)
            .fetch_one(pool)
            .await
    }

    /// Find a pet by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pets WHERE id = ?1");
        sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all pets, newest first.
    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Pet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pets ORDER BY created_at DESC");
        sqlx::query_as::<_, Pet>(&query).fetch_all(pool).await
    }

    /// Update a pet by ID, returning the updated row.
    ///
    /// Only supplied fields are applied; an empty patch returns the current
    /// row untouched (no `updated_at` refresh).
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdatePet,
    ) -> Result<Option<Pet>, sqlx::Error> {
        if input.is_empty() {
            return Self::find_by_id(pool, id).await;
        }

        let query = format!(
            "UPDATE pets SET
                name = COALESCE(?2, name),
                species = COALESCE(?3, species),
                birth_date = CASE WHEN ?4 THEN ?5 ELSE birth_date END,
                updated_at = datetime('now')
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.species)
            .bind(input.birth_date.is_some())
            .bind(input.birth_date.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Delete a pet by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pets WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
