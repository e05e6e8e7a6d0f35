//! Pet model.

use chrono::NaiveDate;
use pettrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `pets` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: DbId,
    pub name: String,
    pub species: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new pet.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePet {
    pub name: String,
    pub species: String,
    pub birth_date: Option<NaiveDate>,
}

/// DTO for updating a pet.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePet {
    pub name: Option<String>,
    pub species: Option<String>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub birth_date: Option<Option<NaiveDate>>,
}

impl UpdatePet {
    /// True when no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.species.is_none() && self.birth_date.is_none()
    }
}
