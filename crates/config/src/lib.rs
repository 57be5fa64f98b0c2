use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

const DEFAULT_CONFIG_FILES: &[&str] = &[
    "roster.toml",
    "config/roster.toml",
    "../roster.toml",
    "../config/roster.toml",
];

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "ROSTER_CONFIG";

/// Conventional connection-string variable. Takes precedence over files and
/// `ROSTER__DATABASE__URL`.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub address: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 7070,
        }
    }
}

/// Connection settings for the member store.
///
/// ```
/// use roster_config::DatabaseConfig;
///
/// let database = DatabaseConfig::default();
/// assert_eq!(database.url, "sqlite://roster.db");
/// assert_eq!(database.max_connections, 10);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://roster.db".to_string(),
            max_connections: 10,
        }
    }
}

/// Load the application configuration by combining defaults, files, and environment overrides.
///
/// ```
/// use roster_config::load;
///
/// std::env::remove_var("ROSTER_CONFIG");
///
/// let config = load().expect("configuration should load with defaults");
/// assert!(!config.http.address.is_empty());
/// ```
pub fn load() -> anyhow::Result<AppConfig> {
    let defaults = AppConfig::default();

    let mut builder = config::Config::builder()
        .set_default("http.address", defaults.http.address.clone())?
        .set_default("http.port", i64::from(defaults.http.port))?
        .set_default("database.url", defaults.database.url.clone())?
        .set_default(
            "database.max_connections",
            i64::from(defaults.database.max_connections),
        )?;

    let environment_overrides = config::Environment::with_prefix("ROSTER").separator("__");

    let mut config_file_attached = false;

    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        builder = builder.add_source(config::File::from(PathBuf::from(&path)));
        config_file_attached = true;
        debug!(path = %path, "loading configuration via ROSTER_CONFIG");
    } else if let Ok(cwd) = std::env::current_dir() {
        let fallback = DEFAULT_CONFIG_FILES
            .iter()
            .map(|candidate| cwd.join(candidate))
            .find(|path| path.exists());

        if let Some(path) = fallback {
            debug!(path = %path.display(), "loading configuration file");
            builder = builder.add_source(config::File::from(path));
            config_file_attached = true;
        }
    }

    if !config_file_attached {
        debug!("no configuration file found, relying on defaults and environment overrides");
    }

    builder = builder.add_source(environment_overrides);

    if let Ok(url) = std::env::var(DATABASE_URL_ENV) {
        if !url.trim().is_empty() {
            debug!("database url taken from DATABASE_URL");
            builder = builder.set_override("database.url", url)?;
        }
    }

    let cfg = builder.build().context("unable to build configuration")?;

    let config = cfg
        .try_deserialize::<AppConfig>()
        .context("invalid configuration")?;

    if config.database.max_connections == 0 {
        anyhow::bail!("invalid configuration: database.max_connections must be at least 1");
    }

    debug!(?config, "loaded roster configuration");
    Ok(config)
}
