// Batch request validation. Runs before any text reaches the LLM.

use thiserror::Error;

use crate::llm::response::{MAX_TEXT_CHARS, MIN_TEXT_CHARS};

/// Most texts accepted in one request.
pub const MAX_BATCH_TEXTS: usize = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("At least one text is required")]
    NoTexts,

    #[error("At most {MAX_BATCH_TEXTS} texts can be analyzed per request, got {0}")]
    TooManyTexts(usize),

    #[error("Text at index {0} cannot be empty or contain only whitespace")]
    EmptyText(usize),

    #[error("Text at index {0} must be at least {MIN_TEXT_CHARS} characters long")]
    TextTooShort(usize),

    #[error("Text at index {0} exceeds maximum length of 10,000 characters")]
    TextTooLong(usize),
}

/// Check a batch and return the texts trimmed, in order.
///
/// The minimum length applies to the trimmed text, the maximum to the text
/// as submitted. The first offending text decides the error.
pub fn validate_texts(texts: &[String]) -> Result<Vec<String>, ValidationError> {
    if texts.is_empty() {
        return Err(ValidationError::NoTexts);
    }
    if texts.len() > MAX_BATCH_TEXTS {
        return Err(ValidationError::TooManyTexts(texts.len()));
    }

    texts
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                Err(ValidationError::EmptyText(i))
            } else if trimmed.chars().count() < MIN_TEXT_CHARS {
                Err(ValidationError::TextTooShort(i))
            } else if text.chars().count() > MAX_TEXT_CHARS {
                Err(ValidationError::TextTooLong(i))
            } else {
                Ok(trimmed.to_string())
            }
        })
        .collect()
}
