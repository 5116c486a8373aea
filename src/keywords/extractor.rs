// KeywordExtractor: the full tokenize → tag → filter → rank pipeline.

use anyhow::Result;
use tracing::debug;

use super::filter::is_candidate;
use super::ranker::rank;
use super::stopwords::StopwordSet;
use super::tagger::{LexiconTagger, PosTagger};
use super::tokenizer::normalize_and_tokenize;

/// Number of keywords returned when the caller doesn't ask for a count.
pub const DEFAULT_TOP_N: usize = 3;

/// Extracts the most frequent nouns from a text.
///
/// Owns its stopword set and tagger; both are read-only after construction,
/// so one extractor can serve concurrent requests behind an `Arc`.
pub struct KeywordExtractor {
    stopwords: StopwordSet,
    tagger: Box<dyn PosTagger>,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    /// English stopwords and the built-in rule-based tagger.
    pub fn new() -> Self {
        Self::with_parts(StopwordSet::english(), Box::new(LexiconTagger::new()))
    }

    pub fn with_parts(stopwords: StopwordSet, tagger: Box<dyn PosTagger>) -> Self {
        Self { stopwords, tagger }
    }

    /// Replace the tagger, keeping the stopword set.
    pub fn with_tagger(self, tagger: Box<dyn PosTagger>) -> Self {
        Self { tagger, ..self }
    }

    /// Replace the stopword set, keeping the tagger.
    pub fn with_stopwords(self, stopwords: StopwordSet) -> Self {
        Self { stopwords, ..self }
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Return up to `top_n` keywords, most frequent first.
    ///
    /// Empty or whitespace-only text returns an empty list without touching
    /// the tagger. The only error source is the tagger itself.
    pub fn extract_keywords(&self, text: &str, top_n: usize) -> Result<Vec<String>> {
        if text.trim().is_empty() || top_n == 0 {
            return Ok(Vec::new());
        }

        let tokens = normalize_and_tokenize(text);
        let token_count = tokens.len();
        let tagged = self.tagger.tag(tokens)?;

        let candidates: Vec<String> = tagged
            .into_iter()
            .filter(|t| is_candidate(&t.token.text, t.tag, &self.stopwords))
            .map(|t| t.token.text)
            .collect();

        let keywords = rank(&candidates, top_n);

        debug!(
            tokens = token_count,
            candidates = candidates.len(),
            keywords = keywords.len(),
            "Extracted keywords"
        );

        Ok(keywords)
    }
}
