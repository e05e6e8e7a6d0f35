//! Domain logic for the pet-care tracker.
//!
//! Pure functions and types only: validation rules, error taxonomy, and the
//! shared type aliases used by the database and API layers. This crate has
//! no I/O and no dependency on the other workspace members.

pub mod error;
pub mod feeding;
pub mod food_types;
pub mod maintenance;
pub mod pagination;
pub mod pets;
pub mod stats;
pub mod types;
pub mod weights;
