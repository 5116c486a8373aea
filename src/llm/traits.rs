// Text analyzer trait: the swap-ready abstraction over LLM providers.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Overall tone of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    /// Parse an exact lower-case label. Anything else is `None`.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "positive" => Some(Sentiment::Positive),
            "neutral" => Some(Sentiment::Neutral),
            "negative" => Some(Sentiment::Negative),
            _ => None,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured fields extracted from a text by the LLM.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmAnalysis {
    /// One or two sentence summary
    pub summary: String,
    /// Inferred title, if the model could find one
    pub title: Option<String>,
    /// Key topics (the prompt asks for three)
    pub topics: Vec<String>,
    pub sentiment: Sentiment,
    /// Heuristic quality score of the response, 0.0 to 1.0
    pub confidence_score: f64,
}

/// Errors that can occur while analyzing text with an LLM.
#[derive(Error, Debug)]
pub enum LlmError {
    /// Text rejected before any call was made
    #[error("{0}")]
    EmptyInput(String),

    #[error("Rate limit exceeded. Please try again later: {0}")]
    RateLimited(String),

    #[error("Request timed out. Please try again: {0}")]
    Timeout(String),

    #[error("LLM API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Failed to reach LLM API: {0}")]
    Transport(String),

    /// The API answered but the payload had no usable content
    #[error("Invalid response from LLM API: {0}")]
    InvalidResponse(String),
}

/// Trait for extracting summary, title, topics and sentiment from text.
/// Async because every real provider is an HTTP call.
#[async_trait]
pub trait TextAnalyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<LlmAnalysis, LlmError>;
}
