//! Search history request and response bodies
//!
//! The save request keeps its fields optional so missing-field errors can
//! answer with the route's own body instead of the deserializer's.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveWordRequest {
    pub word: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryQuery {
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordsResponse {
    pub words: Vec<String>,
}
