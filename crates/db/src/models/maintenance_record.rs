//! Maintenance record model and per-kind statistics.

use pettrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `maintenance_records` table.
///
/// The column is named `type`; the field is `kind` to stay clear of the
/// keyword.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    pub id: DbId,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub performed_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new maintenance record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaintenanceRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub performed_at: Timestamp,
    pub description: Option<String>,
}

/// DTO for updating a maintenance record.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaintenanceRecord {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub performed_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub description: Option<Option<String>>,
}

impl UpdateMaintenanceRecord {
    /// True when no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.performed_at.is_none() && self.description.is_none()
    }
}

/// Count of maintenance events per kind over a date range.
///
/// Kinds with no events in range report 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaintenanceStats {
    pub water: i64,
    pub toilet: i64,
    pub total: i64,
}
