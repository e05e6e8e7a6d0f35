//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! JSON uses camelCase field names; optional and hydrated fields are
//! omitted when absent. Update DTOs distinguish "field absent" (leave
//! unchanged) from "field present but null" (clear) by doubling the option
//! on nullable columns, deserialized through [`double_option`].

pub mod feeding_record;
pub mod feeding_schedule;
pub mod food_type;
pub mod maintenance_record;
pub mod pet;
pub mod weight_record;

use serde::{Deserialize, Deserializer};

/// Wrap a deserialized value in `Some` so an explicit JSON `null` becomes
/// `Some(None)` while an absent field stays `None` via `#[serde(default)]`.
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}
