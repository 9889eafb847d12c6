//! MySQL implementation of the HistoryRepository trait.
//!
//! The `(email, word)` composite primary key gives set semantics:
//! `INSERT IGNORE` makes duplicate adds a no-op, including concurrent
//! ones, without an explicit read-modify-write cycle.

use async_trait::async_trait;
use sqlx::MySqlPool;

use lex_core::errors::{DomainError, DomainResult};
use lex_core::repositories::HistoryRepository;

/// MySQL implementation of HistoryRepository
pub struct MySqlHistoryRepository {
    pool: MySqlPool,
}

impl MySqlHistoryRepository {
    /// Create a new MySQL history repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HistoryRepository for MySqlHistoryRepository {
    async fn add_word(&self, email: &str, word: &str) -> DomainResult<()> {
        sqlx::query("INSERT IGNORE INTO search_history (email, word) VALUES (?, ?)")
            .bind(email)
            .bind(word)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to save word: {e}")))?;

        Ok(())
    }

    async fn get_words(&self, email: &str) -> DomainResult<Vec<String>> {
        let words = sqlx::query_scalar(
            r#"
            SELECT word FROM search_history
            WHERE email = ?
            ORDER BY created_at, word
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to load history: {e}")))?;

        Ok(words)
    }
}
