//! Per-user search history over a history repository
//!
//! Writes are idempotent set-adds keyed by the owner's email; the record is
//! created lazily on the first write. Store failures surface to the caller
//! and are never retried.

use std::sync::Arc;

use tracing::debug;

use crate::errors::{DomainResult, ValidationError};
use crate::repositories::HistoryRepository;

/// Service for recording and reading searched words
pub struct HistoryService<H: HistoryRepository> {
    repository: Arc<H>,
}

impl<H: HistoryRepository> HistoryService<H> {
    /// Creates the service over a repository
    pub fn new(repository: Arc<H>) -> Self {
        Self { repository }
    }

    /// Records a searched word for the user; duplicates collapse
    pub async fn record_word(&self, email: &str, word: &str) -> DomainResult<()> {
        if email.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "email".to_string(),
            }
            .into());
        }
        if word.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "word".to_string(),
            }
            .into());
        }

        self.repository.add_word(email, word).await?;
        debug!(email, word, "word recorded");
        Ok(())
    }

    /// Returns the user's searched words in insertion order
    ///
    /// Users with no history get an empty sequence, not an error.
    pub async fn get_history(&self, email: &str) -> DomainResult<Vec<String>> {
        if email.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "email".to_string(),
            }
            .into());
        }

        self.repository.get_words(email).await
    }
}
