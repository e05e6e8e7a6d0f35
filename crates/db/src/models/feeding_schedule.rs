//! Feeding schedule model.

use pettrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::food_type::FoodType;

/// A row from the `feeding_schedules` table, optionally hydrated with its
/// food type.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FeedingSchedule {
    pub id: DbId,
    pub time: String,
    pub food_type_id: DbId,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_type: Option<FoodType>,
}

/// DTO for creating a new feeding schedule.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedingSchedule {
    pub time: String,
    pub food_type_id: DbId,
    /// Defaults to active when not supplied.
    pub is_active: Option<bool>,
}

/// DTO for updating a feeding schedule.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFeedingSchedule {
    pub time: Option<String>,
    pub food_type_id: Option<DbId>,
    pub is_active: Option<bool>,
}

impl UpdateFeedingSchedule {
    /// True when no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.time.is_none() && self.food_type_id.is_none() && self.is_active.is_none()
    }
}
