//! Repository for the `food_types` table.

use pettrack_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::food_type::{CreateFoodType, FoodType, UpdateFoodType};

/// Column list for food_types queries.
const COLUMNS: &str = "id, name, brand, description, created_at, updated_at";

/// Provides CRUD operations for food types.
pub struct FoodTypeRepo;

impl FoodTypeRepo {
    /// Create a new food type, returning the stored row.
    ///
    /// Empty optional strings are stored as NULL.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateFoodType,
    ) -> Result<FoodType, sqlx::Error> {
        let query = format!(
            "INSERT INTO food_types (name, brand, description)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FoodType>(&query)
            .bind(&input.name)
            .bind(input.brand.as_deref().filter(|s| !s.is_empty()))
            .bind(input.description.as_deref().filter(|s| !s.is_empty()))
            .fetch_one(pool)
            .await
    }

    /// Find a food type by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<FoodType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM food_types WHERE id = ?1");
        sqlx::query_as::<_, FoodType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all food types, alphabetical by name.
    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<FoodType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM food_types ORDER BY name ASC");
        sqlx::query_as::<_, FoodType>(&query).fetch_all(pool).await
    }

    /// Update a food type by ID, returning the updated row.
    ///
    /// `brand` and `description` are cleared when supplied as null or empty;
    /// absent fields are left untouched.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateFoodType,
    ) -> Result<Option<FoodType>, sqlx::Error> {
        if input.is_empty() {
            return Self::find_by_id(pool, id).await;
        }

        let brand = input
            .brand
            .as_ref()
            .map(|inner| inner.as_deref().filter(|s| !s.is_empty()));
        let description = input
            .description
            .as_ref()
            .map(|inner| inner.as_deref().filter(|s| !s.is_empty()));

        let query = format!(
            "UPDATE food_types SET
                name = COALESCE(?2, name),
                brand = CASE WHEN ?3 THEN ?4 ELSE brand END,
                description = CASE WHEN ?5 THEN ?6 ELSE description END,
                updated_at = datetime('now')
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FoodType>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(brand.is_some())
            .bind(brand.flatten())
            .bind(description.is_some())
            .bind(description.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Delete a food type by ID. Returns `true` if a row was deleted.
    ///
    /// Fails with a foreign-key violation while any feeding schedule still
    /// references the food type.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM food_types WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
