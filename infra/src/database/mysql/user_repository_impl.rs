//! MySQL implementation of the UserRepository trait.
//!
//! Concrete user persistence over SQLx. UUIDs are stored as CHAR(36) and
//! parsed back on read; the unique index on `email` is the final arbiter
//! for duplicate signups.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use lex_core::domain::entities::user::User;
use lex_core::errors::{DomainError, DomainResult};
use lex_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::database(format!("Failed to get id: {e}")))?;

        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::database(format!("Invalid UUID: {e}")))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::database(format!("Failed to get email: {e}")))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::database(format!("Failed to get password_hash: {e}")))?,
            display_name: row
                .try_get("display_name")
                .map_err(|e| DomainError::database(format!("Failed to get display_name: {e}")))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::database(format!("Failed to get created_at: {e}")))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::database(format!("Failed to get updated_at: {e}")))?,
            last_login_at: row
                .try_get("last_login_at")
                .map_err(|e| DomainError::database(format!("Failed to get last_login_at: {e}")))?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let query = r#"
            SELECT id, email, password_hash, display_name,
                   created_at, updated_at, last_login_at
            FROM users
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {e}")))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn exists_by_email(&self, email: &str) -> DomainResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {e}")))?;

        Ok(count > 0)
    }

    async fn create(&self, user: User) -> DomainResult<User> {
        let query = r#"
            INSERT INTO users (id, email, password_hash, display_name,
                               created_at, updated_at, last_login_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.display_name)
            .bind(user.created_at)
            .bind(user.updated_at)
            .bind(user.last_login_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to create user: {e}")))?;

        tracing::debug!(user_id = %user.id, "user created");
        Ok(user)
    }

    async fn update(&self, user: User) -> DomainResult<User> {
        let query = r#"
            UPDATE users
            SET email = ?, password_hash = ?, display_name = ?,
                updated_at = ?, last_login_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.display_name)
            .bind(user.updated_at)
            .bind(user.last_login_at)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to update user: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::database(format!(
                "User not found: {}",
                user.id
            )));
        }

        Ok(user)
    }
}
