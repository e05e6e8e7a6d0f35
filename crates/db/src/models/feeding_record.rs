//! Feeding record model and completion statistics.

use pettrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::feeding_schedule::FeedingSchedule;

/// A row from the `feeding_records` table, optionally hydrated with its
/// schedule (and that schedule's food type).
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FeedingRecord {
    pub id: DbId,
    pub feeding_schedule_id: DbId,
    pub actual_time: Timestamp,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: Timestamp,
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feeding_schedule: Option<FeedingSchedule>,
}

/// DTO for creating a new feeding record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedingRecord {
    pub feeding_schedule_id: DbId,
    pub actual_time: Timestamp,
    pub completed: bool,
    pub notes: Option<String>,
}

/// DTO for updating a feeding record.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFeedingRecord {
    pub feeding_schedule_id: Option<DbId>,
    pub actual_time: Option<Timestamp>,
    pub completed: Option<bool>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub notes: Option<Option<String>>,
}

impl UpdateFeedingRecord {
    /// True when no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.feeding_schedule_id.is_none()
            && self.actual_time.is_none()
            && self.completed.is_none()
            && self.notes.is_none()
    }
}

/// Completion statistics over a date range.
///
/// `rate` is a percentage rounded to two decimal places; an empty range
/// yields all zeroes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRate {
    pub total: i64,
    pub completed: i64,
    pub rate: f64,
}
