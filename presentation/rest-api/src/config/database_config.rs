use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

use super::error::ConfigError;

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub pool: DatabaseConfig,
    pub migrations_path: Option<String>,
}

impl DatabaseSettings {
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (required)
    /// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
    /// - MIGRATIONS_PATH: directory of SQL migrations to apply on start.
    ///   Migrations are skipped when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env::var("DATABASE_URL").ok(),
            env::var("DATABASE_MAX_CONNECTIONS").ok(),
            env::var("MIGRATIONS_PATH").ok(),
        )
    }

    fn from_values(
        url: Option<String>,
        max_connections: Option<String>,
        migrations_path: Option<String>,
    ) -> Result<Self, ConfigError> {
        let url = url
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingVariable("DATABASE_URL"))?;

        let mut pool = DatabaseConfig::new(url);
        if let Some(raw) = max_connections {
            let max = raw
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidVariable("DATABASE_MAX_CONNECTIONS"))?;
            pool = pool.with_max_connections(max);
        }

        Ok(Self {
            pool,
            migrations_path: migrations_path.filter(|value| !value.trim().is_empty()),
        })
    }
}

/// Initialize database connection pool from environment variables
///
/// # Errors
/// Returns error if DATABASE_URL is not set, connection fails or a migration fails
pub async fn init_database() -> anyhow::Result<PgPool> {
    let settings = DatabaseSettings::from_env()?;
    let pool = create_postgres_pool(&settings.pool).await?;

    match &settings.migrations_path {
        Some(path) => run_migrations(&pool, path).await?,
        None => tracing::info!("MIGRATIONS_PATH not set, skipping migrations"),
    }

    Ok(pool)
}
