// Response normalization: turn raw model output into an LlmAnalysis.
//
// Models don't always follow the JSON instructions. Unparseable output is
// kept as a truncated summary; missing or malformed fields get defaults.
// Nothing here fails: every string produces a usable analysis.

use std::sync::LazyLock;

use regex_lite::Regex;
use serde_json::{Map, Value};

use super::traits::{LlmAnalysis, LlmError, Sentiment};
use crate::output::truncate_chars;

/// Shortest accepted text, measured after trimming.
pub const MIN_TEXT_CHARS: usize = 10;
/// Longest accepted text, measured before trimming.
pub const MAX_TEXT_CHARS: usize = 10_000;

const FALLBACK_SUMMARY_CHARS: usize = 200;
const MISSING_SUMMARY: &str = "Unable to generate summary";
const FALLBACK_TOPIC: &str = "general";

static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^```[a-zA-Z]*\s*(.*?)\s*```$").expect("static regex is valid")
});

/// Reject text the LLM shouldn't be asked about.
pub fn validate_input(text: &str) -> Result<(), LlmError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(LlmError::EmptyInput(
            "Text cannot be empty or contain only whitespace".to_string(),
        ));
    }
    if trimmed.chars().count() < MIN_TEXT_CHARS {
        return Err(LlmError::EmptyInput(format!(
            "Text must be at least {MIN_TEXT_CHARS} characters long"
        )));
    }
    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(LlmError::EmptyInput(
            "Text is too long. Maximum 10,000 characters allowed".to_string(),
        ));
    }
    Ok(())
}

/// Parse the model's message content into an analysis.
pub fn parse_analysis(content: &str) -> LlmAnalysis {
    let content = content.trim();
    let body = CODE_FENCE
        .captures(content)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .unwrap_or(content);

    let (summary, title, topics, sentiment) = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(fields)) => normalize_fields(&fields),
        _ => (
            truncate_chars(content, FALLBACK_SUMMARY_CHARS),
            None,
            vec![FALLBACK_TOPIC.to_string()],
            Sentiment::Neutral,
        ),
    };

    let confidence_score = compute_confidence(&summary, &topics, sentiment);

    LlmAnalysis {
        summary,
        title,
        topics,
        sentiment,
        confidence_score,
    }
}

fn normalize_fields(fields: &Map<String, Value>) -> (String, Option<String>, Vec<String>, Sentiment) {
    let summary = match fields.get("summary") {
        Some(Value::String(s)) => s.clone(),
        _ => MISSING_SUMMARY.to_string(),
    };

    let title = match fields.get("title") {
        Some(Value::String(s)) => Some(s.clone()),
        _ => None,
    };

    let topics = match fields.get("topics") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => vec![FALLBACK_TOPIC.to_string()],
    };

    let sentiment = fields
        .get("sentiment")
        .and_then(Value::as_str)
        .and_then(Sentiment::parse)
        .unwrap_or(Sentiment::Neutral);

    (summary, title, topics, sentiment)
}

/// Heuristic confidence in a response, from 0.5 up to 1.0.
///
/// +0.2 for a summary of sensible length, +0.2 for at least two topics,
/// +0.1 for a decisive (non-neutral) sentiment.
pub fn compute_confidence(summary: &str, topics: &[String], sentiment: Sentiment) -> f64 {
    let mut confidence = 0.5;

    let summary_chars = summary.chars().count();
    if (10..=300).contains(&summary_chars) {
        confidence += 0.2;
    }
    if topics.len() >= 2 {
        confidence += 0.2;
    }
    if matches!(sentiment, Sentiment::Positive | Sentiment::Negative) {
        confidence += 0.1;
    }

    f64::min(confidence, 1.0)
}
