//! Roster Database Crate
//!
//! Connection management, embedded migrations and the SQL-backed
//! `MemberRepository` for the `members` table.

use roster_config::DatabaseConfig;
use sqlx::SqlitePool;

pub mod connection;
pub mod entities;
pub mod migrations;
pub mod repos;
pub mod types;

pub use connection::{prepare_database, test_connection};
pub use migrations::run_migrations;

pub use repos::MemberRepository;

pub use entities::member::{Member, MemberFilter, MemberPayload};

pub use types::{errors::DatabaseError, DatabaseResult};

/// Initialize the database with migrations
pub async fn initialize_database(config: &DatabaseConfig) -> DatabaseResult<SqlitePool> {
    let pool = prepare_database(config)
        .await
        .map_err(|e| DatabaseError::ConnectionError(format!("{e:#}")))?;

    run_migrations(&pool)
        .await
        .map_err(|e| DatabaseError::MigrationError(format!("{e:#}")))?;

    Ok(pool)
}
