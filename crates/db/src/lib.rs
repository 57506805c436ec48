//! Data access for the Sakila schema.
//!
//! The schema is owned elsewhere; this crate only reads it. Everything goes
//! through a single [`DbPool`] built once at startup from [`PoolConfig`].

use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::MySqlPool;

/// The schema name is fixed; only the server and credentials vary.
pub const DATABASE_NAME: &str = "sakila";

/// Default upper bound on simultaneously open connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Default time a caller may wait in the pool queue for a free connection.
///
/// Long enough that saturation queues requests rather than failing them.
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 3600;

/// Error raised while reading pool settings from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Connection pool settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 3306,
            user: "root".into(),
            password: String::new(),
            database: DATABASE_NAME.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS),
        }
    }
}

impl PoolConfig {
    /// Load pool settings from environment variables.
    ///
    /// | Env Var                   | Default     |
    /// |---------------------------|-------------|
    /// | `DB_HOST`                 | `localhost` |
    /// | `DB_PORT`                 | `3306`      |
    /// | `DB_USER`                 | `root`      |
    /// | `DB_PASS`                 | (empty)     |
    /// | `DB_MAX_CONNECTIONS`      | `10`        |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `3600`      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`PoolConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("DB_PORT") {
            Some(v) => parse_var("DB_PORT", "u16", &v)?,
            None => defaults.port,
        };
        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => parse_var::<u32>("DB_MAX_CONNECTIONS", "positive u32", &v)
                .and_then(|n| non_zero("DB_MAX_CONNECTIONS", n, &v))?,
            None => defaults.max_connections,
        };
        let acquire_timeout = match lookup("DB_ACQUIRE_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(parse_var("DB_ACQUIRE_TIMEOUT_SECS", "u64", &v)?),
            None => defaults.acquire_timeout,
        };

        Ok(Self {
            host: lookup("DB_HOST").unwrap_or(defaults.host),
            port,
            user: lookup("DB_USER").unwrap_or(defaults.user),
            password: lookup("DB_PASS").unwrap_or(defaults.password),
            database: defaults.database,
            max_connections,
            acquire_timeout,
        })
    }

    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }

    /// Pool sizing: at most `max_connections` open at once, excess callers
    /// wait in the pool's queue for up to `acquire_timeout`.
    pub fn pool_options(&self) -> MySqlPoolOptions {
        MySqlPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
    }
}

fn parse_var<T: std::str::FromStr>(
    var: &'static str,
    expected: &'static str,
    value: &str,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        expected,
        value: value.to_string(),
    })
}

fn non_zero(var: &'static str, n: u32, raw: &str) -> Result<u32, ConfigError> {
    if n == 0 {
        return Err(ConfigError::Invalid {
            var,
            expected: "positive u32",
            value: raw.to_string(),
        });
    }
    Ok(n)
}

/// Create the connection pool and open a first connection to fail fast on
/// bad credentials.
pub async fn create_pool(config: &PoolConfig) -> Result<DbPool, sqlx::Error> {
    config
        .pool_options()
        .connect_with(config.connect_options())
        .await
}

/// Create the pool without connecting; connections open on first use.
pub fn create_lazy_pool(config: &PoolConfig) -> DbPool {
    config.pool_options().connect_lazy_with(config.connect_options())
}

/// Verify the database is reachable with a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
