//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument. Not-found lookups
//! return `Ok(None)`; constraint violations and store failures propagate
//! as `sqlx::Error` for the caller to classify.

pub mod feeding_record_repo;
pub mod feeding_schedule_repo;
pub mod food_type_repo;
pub mod maintenance_record_repo;
pub mod pet_repo;
pub mod weight_record_repo;

pub use feeding_record_repo::FeedingRecordRepo;
pub use feeding_schedule_repo::FeedingScheduleRepo;
pub use food_type_repo::FoodTypeRepo;
pub use maintenance_record_repo::MaintenanceRecordRepo;
pub use pet_repo::PetRepo;
pub use weight_record_repo::WeightRecordRepo;
