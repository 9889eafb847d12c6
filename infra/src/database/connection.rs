//! Database connection pool management
//!
//! Connection pooling via SQLx with MySQL, plus the schema bootstrap that
//! creates the two tables on startup with native `CREATE TABLE IF NOT
//! EXISTS` statements.

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use std::time::Duration;

use lex_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Database connection pool wrapper
#[derive(Clone)]
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    /// Create a new connection pool from configuration
    pub async fn new(config: &DatabaseConfig) -> Result<Self, InfrastructureError> {
        tracing::info!(
            max_connections = config.max_connections,
            "creating database connection pool"
        );

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .test_before_acquire(true)
            .connect(&config.url)
            .await
            .map_err(|e| {
                InfrastructureError::Database(format!("Failed to connect to database: {e}"))
            })?;

        Ok(Self { pool })
    }

    /// Create the schema when missing
    pub async fn ensure_schema(&self) -> Result<(), InfrastructureError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id            CHAR(36)     NOT NULL PRIMARY KEY,
                email         VARCHAR(255) NOT NULL UNIQUE,
                password_hash VARCHAR(255) NULL,
                display_name  VARCHAR(255) NOT NULL,
                created_at    TIMESTAMP    NOT NULL DEFAULT CURRENT_TIMESTAMP,
                updated_at    TIMESTAMP    NOT NULL DEFAULT CURRENT_TIMESTAMP
                              ON UPDATE CURRENT_TIMESTAMP,
                last_login_at TIMESTAMP    NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| InfrastructureError::Database(format!("Failed to create users table: {e}")))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS search_history (
                email      VARCHAR(255) NOT NULL,
                word       VARCHAR(255) NOT NULL,
                created_at TIMESTAMP    NOT NULL DEFAULT CURRENT_TIMESTAMP,
                PRIMARY KEY (email, word)
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| {
            InfrastructureError::Database(format!("Failed to create search_history table: {e}"))
        })?;

        tracing::info!("database schema verified");
        Ok(())
    }

    /// Verify connectivity
    pub async fn health_check(&self) -> Result<(), InfrastructureError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| InfrastructureError::Database(format!("Health check failed: {e}")))?;
        Ok(())
    }

    /// Access the underlying SQLx pool
    pub fn inner(&self) -> &MySqlPool {
        &self.pool
    }
}
