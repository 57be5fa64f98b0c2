//! Database connection management

use anyhow::{Context, Result};
use roster_config::DatabaseConfig;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tokio::fs;
use tracing::{debug, info};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Prepare and establish a database connection pool
pub async fn prepare_database(config: &DatabaseConfig) -> Result<SqlitePool> {
    let in_memory = is_in_memory(&config.url);

    if let Some(path) = sqlite_file_path(&config.url) {
        ensure_parent_directory(&path).await?;
    }

    let options = SqliteConnectOptions::from_str(&config.url)
        .with_context(|| format!("invalid database url {}", config.url))?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);

    let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections);

    // Every connection to :memory: opens its own database, so keep exactly one alive.
    if in_memory {
        debug!("in-memory sqlite database, limiting pool to a single connection");
        pool_options = pool_options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    let pool = pool_options
        .connect_with(options)
        .await
        .with_context(|| format!("failed to connect to database {}", config.url))?;

    info!(url = %config.url, "database connection established");
    Ok(pool)
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Filesystem path of a file-backed SQLite url, `None` for in-memory databases.
pub(crate) fn sqlite_file_path(url: &str) -> Option<PathBuf> {
    if is_in_memory(url) {
        return None;
    }

    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();

    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

/// Ensure the directory holding the SQLite file exists
async fn ensure_parent_directory(path: &std::path::Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await.with_context(|| {
                format!("failed to create sqlite directory {}", parent.display())
            })?;
        }
    }

    Ok(())
}

/// Round-trip a trivial statement to prove the pool is usable
pub async fn test_connection(pool: &SqlitePool) -> Result<()> {
    sqlx::query("SELECT 1")
        .fetch_one(pool)
        .await
        .context("failed to test database connection")?;
    Ok(())
}
