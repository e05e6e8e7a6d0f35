//! Weight record model.

use chrono::NaiveDate;
use pettrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::pet::Pet;

/// A row from the `weight_records` table, optionally hydrated with its pet.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WeightRecord {
    pub id: DbId,
    pub pet_id: DbId,
    pub weight: f64,
    pub recorded_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: Timestamp,
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet: Option<Pet>,
}

/// DTO for creating a new weight record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWeightRecord {
    pub pet_id: DbId,
    pub weight: f64,
    pub recorded_date: NaiveDate,
    pub notes: Option<String>,
}

/// DTO for updating a weight record.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWeightRecord {
    pub pet_id: Option<DbId>,
    pub weight: Option<f64>,
    pub recorded_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub notes: Option<Option<String>>,
}

impl UpdateWeightRecord {
    /// True when no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.pet_id.is_none()
            && self.weight.is_none()
            && self.recorded_date.is_none()
            && self.notes.is_none()
    }
}
