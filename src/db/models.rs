// Data models: Rust structs that map to database rows.
//
// These are the types that flow through the application and out over the
// HTTP API. They're separate from the queries so other modules can use them
// without depending on rusqlite directly.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::llm::Sentiment;

/// A stored analysis of one submitted text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub id: Uuid,
    pub original_text: String,
    pub summary: String,
    pub title: Option<String>,
    /// LLM-chosen topics (JSON-encoded in the DB)
    pub topics: Vec<String>,
    pub sentiment: Sentiment,
    /// Locally extracted keywords, most frequent first (JSON-encoded in the DB)
    pub keywords: Vec<String>,
    pub confidence_score: f64,
    /// RFC 3339 UTC, millisecond precision
    pub created_at: String,
    pub updated_at: Option<String>,
}

/// Optional conditions for a search. Every supplied condition must hold.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchFilter {
    /// Must be one of the record's topics (exact match)
    pub topic: Option<String>,
    /// Must be one of the record's keywords (exact match)
    pub keyword: Option<String>,
    /// Exact, case-sensitive sentiment label
    pub sentiment: Option<String>,
}

impl SearchFilter {
    pub fn is_empty(&self) -> bool {
        self.topic.is_none() && self.keyword.is_none() && self.sentiment.is_none()
    }
}

/// Aggregate numbers for `quarry status`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisStats {
    pub total: i64,
    /// (sentiment label, count), most common first
    pub by_sentiment: Vec<(String, i64)>,
    pub latest_created_at: Option<String>,
}
