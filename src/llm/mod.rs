// LLM text analysis: trait-based abstraction for swappable providers.
//
// The TextAnalyzer trait defines the interface. OpenAiAnalyzer implements it
// against any OpenAI-compatible chat-completions endpoint. Response parsing
// and confidence scoring live in `response` so they can be tested offline.

pub mod openai;
pub mod rate_limiter;
pub mod response;
pub mod traits;

pub use openai::OpenAiAnalyzer;
pub use traits::{LlmAnalysis, LlmError, Sentiment, TextAnalyzer};
