use std::path::Path;
use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, Executor, PgPool};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::DatabaseConfig;

/// Errors from the persistence layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error(transparent)]
    Sqlx(sqlx::Error),
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                let constraint = db_err.constraint().unwrap_or_default().to_string();
                return DatabaseError::UniqueViolation(constraint);
            }
        }
        DatabaseError::Sqlx(err)
    }
}

/// Pool construction and startup schema handling for the PostgreSQL backend
pub struct DatabaseManager;

impl DatabaseManager {
    /// Open the pool and verify connectivity. Callers treat failure as fatal.
    pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
        if config.url.trim().is_empty() {
            return Err(DatabaseError::ConfigMissing("DATABASE_URL"));
        }

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect(&config.url)
            .await?;

        Self::health_check(&pool).await?;
        info!("Created database pool (max {} connections)", config.max_connections);
        Ok(pool)
    }

    /// Apply the idempotent schema script. Problems are logged, never returned.
    pub async fn apply_schema(pool: &PgPool, schema_path: &Path) {
        let script = match tokio::fs::read_to_string(schema_path).await {
            Ok(script) => script,
            Err(e) => {
                warn!(
                    "Failed to read {} for database schema initialization, skipping: {}",
                    schema_path.display(),
                    e
                );
                return;
            }
        };

        match pool.execute(script.as_str()).await {
            Ok(_) => info!("Applied database schema from {}", schema_path.display()),
            Err(e) => warn!("Failed to (re-)initialize the schema: {}", e),
        }
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(pool: &PgPool) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }

    pub async fn close(pool: PgPool) {
        pool.close().await;
        info!("Closed database pool");
    }
}
