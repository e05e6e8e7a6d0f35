//! Ledger-based schema migrator.
//!
//! Migrations are a fixed, ordered, forward-only list. Each entry executes
//! at most once: executed names are recorded in the `migrations` ledger
//! table and skipped on later startups. Any DDL failure propagates to the
//! caller, which aborts startup rather than serving on a partial schema.

use crate::DbPool;

struct Migration {
    name: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        name: "001_create_pets_table",
        sql: "CREATE TABLE IF NOT EXISTS pets (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                species TEXT NOT NULL,
                birth_date DATE,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )",
    },
    Migration {
        name: "002_create_food_types_table",
        sql: "CREATE TABLE IF NOT EXISTS food_types (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                brand TEXT,
                description TEXT,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )",
    },
    Migration {
        name: "003_create_feeding_schedules_table",
        sql: "CREATE TABLE IF NOT EXISTS feeding_schedules (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                time TEXT NOT NULL,
                food_type_id INTEGER NOT NULL,
                is_active BOOLEAN DEFAULT 1,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                FOREIGN KEY (food_type_id) REFERENCES food_types(id) ON DELETE RESTRICT
            )",
    },
    Migration {
        name: "004_create_feeding_records_table",
        sql: "CREATE TABLE IF NOT EXISTS feeding_records (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                feeding_schedule_id INTEGER NOT NULL,
                actual_time DATETIME NOT NULL,
                completed BOOLEAN NOT NULL,
                notes TEXT,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                FOREIGN KEY (feeding_schedule_id) REFERENCES feeding_schedules(id) ON DELETE RESTRICT
            )",
    },
    Migration {
        name: "005_create_weight_records_table",
        sql: "CREATE TABLE IF NOT EXISTS weight_records (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                pet_id INTEGER NOT NULL,
                weight REAL NOT NULL,
                recorded_date DATE NOT NULL,
                notes TEXT,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                FOREIGN KEY (pet_id) REFERENCES pets(id) ON DELETE RESTRICT
            )",
    },
    Migration {
        name: "006_create_maintenance_records_table",
        sql: "CREATE TABLE IF NOT EXISTS maintenance_records (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type TEXT NOT NULL CHECK (type IN ('water', 'toilet')),
                performed_at DATETIME NOT NULL,
                description TEXT,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )",
    },
];

/// Bring the schema up to date, executing any migration not yet recorded
/// in the ledger. Safe to call on every startup.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS migrations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            executed_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )",
    )
    .execute(pool)
    .await?;

    let executed: Vec<(String,)> = sqlx::query_as("SELECT name FROM migrations")
        .fetch_all(pool)
        .await?;
    let executed: std::collections::HashSet<String> =
        executed.into_iter().map(|(name,)| name).collect();

    for migration in MIGRATIONS {
        if executed.contains(migration.name) {
            continue;
        }

        tracing::info!(name = migration.name, "Executing migration");
        sqlx::query(migration.sql).execute(pool).await?;
        sqlx::query("INSERT INTO migrations (name) VALUES (?1)")
            .bind(migration.name)
            .execute(pool)
            .await?;
    }

    Ok(())
}
