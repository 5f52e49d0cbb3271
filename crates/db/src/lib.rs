//! Persistence layer: connection pool, migrations, row models, repositories,
//! and the store adapter the services talk to.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub mod models;
pub mod query;
pub mod repositories;
pub mod store;

pub type DbPool = sqlx::PgPool;

/// Connection target plus pool sizing and recycling.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub connect_options: PgConnectOptions,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Connections older than this are closed and replaced.
    pub max_lifetime: Duration,
    /// Idle connections above `min_connections` are closed after this long.
    pub idle_timeout: Duration,
}

impl PoolConfig {
    pub fn new(connect_options: PgConnectOptions) -> Self {
        Self {
            connect_options,
            max_connections: 100,
            min_connections: 10,
            max_lifetime: Duration::from_secs(3600),
            idle_timeout: Duration::from_secs(600),
        }
    }
}

/// Create a connection pool from the given configuration.
pub async fn create_pool(config: &PoolConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .max_lifetime(config.max_lifetime)
        .idle_timeout(config.idle_timeout)
        .connect_with(config.connect_options.clone())
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await
        .map(|_| ())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
