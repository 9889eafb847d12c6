//! Search history repository trait and in-memory mock.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::history::SearchHistory;
use crate::errors::DomainResult;

/// Repository trait for per-user search history
///
/// Adding a word is an idempotent set-add keyed by the owner's email; the
/// store's upsert semantics serialize concurrent adds, so no external
/// locking is required.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Add a word to the user's history; no-op when already present.
    /// The history record is created lazily on first write.
    async fn add_word(&self, email: &str, word: &str) -> DomainResult<()>;

    /// Fetch the user's words in insertion order; empty when no record exists
    async fn get_words(&self, email: &str) -> DomainResult<Vec<String>>;
}

/// In-memory history repository for tests
pub struct MockHistoryRepository {
    histories: Arc<RwLock<HashMap<String, SearchHistory>>>,
}

impl MockHistoryRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            histories: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockHistoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryRepository for MockHistoryRepository {
    async fn add_word(&self, email: &str, word: &str) -> DomainResult<()> {
        let mut histories = self.histories.write().await;
        histories
            .entry(email.to_string())
            .or_insert_with(|| SearchHistory::new(email))
            .add_word(word);
        Ok(())
    }

    async fn get_words(&self, email: &str) -> DomainResult<Vec<String>> {
        let histories = self.histories.read().await;
        Ok(histories
            .get(email)
            .map(|h| h.words.clone())
            .unwrap_or_default())
    }
}
