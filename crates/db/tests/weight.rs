//! Weight record behaviour: pet hydration, latest-per-pet lookup, range
//! queries, and the restrict decision on pet deletion.

use sqlx::SqlitePool;

use pettrack_db::models::pet::CreatePet;
use pettrack_db::models::weight_record::CreateWeightRecord;
use pettrack_db::repositories::{PetRepo, WeightRecordRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_pet(name: &str) -> CreatePet {
    CreatePet {
        name: name.to_string(),
        species: "Cat".to_string(),
        birth_date: None,
    }
}

fn new_weight(pet_id: i64, weight: f64, date: &str) -> CreateWeightRecord {
    CreateWeightRecord {
        pet_id,
        weight,
        recorded_date: date.parse().unwrap(),
        notes: None,
    }
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation())
}

async fn migrated(pool: &SqlitePool) {
    pettrack_db::run_migrations(pool).await.unwrap();
}

// ---------------------------------------------------------------------------
// Test: create and hydration
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn create_hydrates_pet(pool: SqlitePool) {
    migrated(&pool).await;

    let pet = PetRepo::create(&pool, &new_pet("Fluffy")).await.unwrap();
    let record = WeightRecordRepo::create(&pool, &new_weight(pet.id, 4.25, "2023-10-28"))
        .await
        .unwrap();

    assert_eq!(record.weight, 4.25);
    let hydrated = record.pet.expect("pet should be hydrated");
    assert_eq!(hydrated.id, pet.id);
    assert_eq!(hydrated.name, "Fluffy");
}

#[sqlx::test]
async fn create_with_unknown_pet_fails(pool: SqlitePool) {
    migrated(&pool).await;

    let err = WeightRecordRepo::create(&pool, &new_weight(9999, 4.0, "2023-10-28"))
        .await
        .unwrap_err();
    assert!(is_foreign_key_violation(&err));
}

// ---------------------------------------------------------------------------
// Test: latest-per-pet lookup
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn latest_picks_most_recent_recorded_date(pool: SqlitePool) {
    migrated(&pool).await;

    let pet = PetRepo::create(&pool, &new_pet("Fluffy")).await.unwrap();
    WeightRecordRepo::create(&pool, &new_weight(pet.id, 4.0, "2023-10-01"))
        .await
        .unwrap();
    WeightRecordRepo::create(&pool, &new_weight(pet.id, 4.4, "2023-10-20"))
        .await
        .unwrap();
    WeightRecordRepo::create(&pool, &new_weight(pet.id, 4.2, "2023-10-10"))
        .await
        .unwrap();

    let latest = WeightRecordRepo::find_latest_by_pet(&pool, pet.id)
        .await
        .unwrap()
        .expect("pet has records");
    assert_eq!(latest.weight, 4.4);
    assert_eq!(latest.recorded_date, "2023-10-20".parse().unwrap());
}

#[sqlx::test]
async fn latest_for_pet_without_records_is_none(pool: SqlitePool) {
    migrated(&pool).await;

    let pet = PetRepo::create(&pool, &new_pet("Fluffy")).await.unwrap();
    let latest = WeightRecordRepo::find_latest_by_pet(&pool, pet.id)
        .await
        .unwrap();
    assert!(latest.is_none());
}

// ---------------------------------------------------------------------------
// Test: per-pet range query
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn range_query_is_inclusive_and_scoped_to_pet(pool: SqlitePool) {
    migrated(&pool).await;

    let fluffy = PetRepo::create(&pool, &new_pet("Fluffy")).await.unwrap();
    let momo = PetRepo::create(&pool, &new_pet("Momo")).await.unwrap();

    WeightRecordRepo::create(&pool, &new_weight(fluffy.id, 4.0, "2023-10-01"))
        .await
        .unwrap();
    WeightRecordRepo::create(&pool, &new_weight(fluffy.id, 4.2, "2023-10-31"))
        .await
        .unwrap();
    // Outside the range.
    WeightRecordRepo::create(&pool, &new_weight(fluffy.id, 4.5, "2023-11-01"))
        .await
        .unwrap();
    // Other pet, in range.
    WeightRecordRepo::create(&pool, &new_weight(momo.id, 7.0, "2023-10-15"))
        .await
        .unwrap();

    let records = WeightRecordRepo::find_by_pet_and_date_range(
        &pool,
        fluffy.id,
        "2023-10-01".parse().unwrap(),
        "2023-10-31".parse().unwrap(),
    )
    .await
    .unwrap();

    assert_eq!(records.len(), 2);
    // Chart order: oldest first.
    assert_eq!(records[0].recorded_date, "2023-10-01".parse().unwrap());
    assert_eq!(records[1].recorded_date, "2023-10-31".parse().unwrap());
}

// ---------------------------------------------------------------------------
// Test: pet deletion is blocked while records exist
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn deleting_pet_with_weight_records_is_blocked(pool: SqlitePool) {
    migrated(&pool).await;

    let pet = PetRepo::create(&pool, &new_pet("Fluffy")).await.unwrap();
    let record = WeightRecordRepo::create(&pool, &new_weight(pet.id, 4.0, "2023-10-01"))
        .await
        .unwrap();

    let err = PetRepo::delete(&pool, pet.id).await.unwrap_err();
    assert!(is_foreign_key_violation(&err));
    assert!(PetRepo::find_by_id(&pool, pet.id).await.unwrap().is_some());

    // Once the dependent record is gone the pet can be deleted.
    assert!(WeightRecordRepo::delete(&pool, record.id).await.unwrap());
    assert!(PetRepo::delete(&pool, pet.id).await.unwrap());
}
