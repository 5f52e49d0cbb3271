use std::time::Duration;

use axum::http::HeaderValue;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use tasklist_db::PoolConfig;

/// Startup configuration problem. Reported once and the process exits.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got '{value}'")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("DATABASE_URL is not a valid Postgres connection string")]
    DatabaseUrl(#[source] sqlx::Error),
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Deployment environment name (default: `development`).
    pub app_env: String,
    pub database: DatabaseConfig,
}

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connect_options: PgConnectOptions,
    pub max_connections: u32,
    pub min_connections: u32,
    pub max_lifetime_secs: u64,
}

impl DatabaseConfig {
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig {
            max_connections: self.max_connections,
            min_connections: self.min_connections,
            max_lifetime: Duration::from_secs(self.max_lifetime_secs),
            ..PoolConfig::new(self.connect_options.clone())
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8080`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `APP_ENV`              | `development`              |
    /// | `DATABASE_URL`         | built from `DB_*`          |
    /// | `DB_MAX_CONNECTIONS`   | `100`                      |
    /// | `DB_MIN_CONNECTIONS`   | `10`                       |
    /// | `DB_MAX_LIFETIME_SECS` | `3600`                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| -> String {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let host = var("HOST", "0.0.0.0");
        let port: u16 = parse("PORT", var("PORT", "8080"), "a valid port number")?;

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        for origin in &cors_origins {
            if origin.parse::<HeaderValue>().is_err() {
                return Err(ConfigError::Invalid {
                    key: "CORS_ORIGINS",
                    expected: "a comma-separated list of origins",
                    value: origin.clone(),
                });
            }
        }

        let request_timeout_secs: u64 = parse(
            "REQUEST_TIMEOUT_SECS",
            var("REQUEST_TIMEOUT_SECS", "30"),
            "a whole number of seconds",
        )?;

        let app_env = var("APP_ENV", "development");

        let connect_options = match lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()) {
            Some(url) => url
                .trim()
                .parse::<PgConnectOptions>()
                .map_err(ConfigError::DatabaseUrl)?,
            None => {
                let db_port: u16 =
                    parse("DB_PORT", var("DB_PORT", "5432"), "a valid port number")?;
                let ssl_mode: PgSslMode = parse(
                    "DB_SSL_MODE",
                    var("DB_SSL_MODE", "disable"),
                    "one of disable, allow, prefer, require, verify-ca, verify-full",
                )?;
                let options = PgConnectOptions::new()
                    .host(&var("DB_HOST", "localhost"))
                    .port(db_port)
                    .username(&var("DB_USER", "postgres"))
                    .database(&var("DB_NAME", "todo_db"))
                    .ssl_mode(ssl_mode);
                match lookup("DB_PASSWORD").filter(|v| !v.is_empty()) {
                    Some(password) => options.password(&password),
                    None => options,
                }
            }
        };

        let database = DatabaseConfig {
            connect_options,
            max_connections: parse(
                "DB_MAX_CONNECTIONS",
                var("DB_MAX_CONNECTIONS", "100"),
                "a positive integer",
            )?,
            min_connections: parse(
                "DB_MIN_CONNECTIONS",
                var("DB_MIN_CONNECTIONS", "10"),
                "a positive integer",
            )?,
            max_lifetime_secs: parse(
                "DB_MAX_LIFETIME_SECS",
                var("DB_MAX_LIFETIME_SECS", "3600"),
                "a whole number of seconds",
            )?,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            app_env,
            database,
        })
    }
}

fn parse<T: std::str::FromStr>(
    key: &'static str,
    value: String,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Invalid {
        key,
        expected,
        value,
    })
}
