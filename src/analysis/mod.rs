// Analysis pipeline: validate, ask the LLM, extract keywords, store.

pub mod service;
pub mod validation;

pub use service::{AnalysisError, AnalysisService};
pub use validation::{validate_texts, ValidationError, MAX_BATCH_TEXTS};
