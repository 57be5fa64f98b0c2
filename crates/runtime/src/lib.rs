use anyhow::{Context, Result};
use roster_config::AppConfig;
use roster_database::{initialize_database, test_connection};
use sqlx::SqlitePool;
use tracing::info;

pub mod telemetry {
    use anyhow::Result;
    use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

    /// Install the global subscriber; `RUST_LOG` overrides the `info` default
    pub fn init_tracing() -> Result<()> {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let subscriber = SubscriberBuilder::default()
            .with_env_filter(env_filter)
            .with_target(true)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|error| anyhow::anyhow!("failed to set tracing subscriber: {error}"))
    }
}

#[derive(Clone)]
pub struct BackendServices {
    pub db_pool: SqlitePool,
}

impl BackendServices {
    /// Open the configured database, apply migrations and verify the pool
    pub async fn initialise(config: &AppConfig) -> Result<Self> {
        let db_pool = initialize_database(&config.database)
            .await
            .with_context(|| format!("failed to initialise database at {}", config.database.url))?;

        test_connection(&db_pool)
            .await
            .context("database connection check failed")?;

        info!(url = %config.database.url, "database ready");

        Ok(Self { db_pool })
    }
}

pub async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(?error, "failed to listen for shutdown signal");
    }
    info!("shutdown signal received");
}
