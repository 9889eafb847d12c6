//! Search history entity: the set of words a user has looked up.

use serde::{Deserialize, Serialize};

/// Per-user search history with set semantics
///
/// Words keep their insertion order; adding a word that is already present
/// is a no-op. History is never deleted or expired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistory {
    /// Email of the owning user
    pub email: String,

    /// Searched words in insertion order, no duplicates
    pub words: Vec<String>,
}

impl SearchHistory {
    /// Creates an empty history for a user
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            words: Vec::new(),
        }
    }

    /// Adds a word; returns `false` when the word was already present
    pub fn add_word(&mut self, word: &str) -> bool {
        if self.contains(word) {
            return false;
        }
        self.words.push(word.to_string());
        true
    }

    /// Whether the word was already searched
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}
