// Stopword set: base English list plus fixed and configured extras.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// Reporting verbs and modals that slip past the base list but never make
/// useful keywords.
pub const SUPPLEMENTARY_STOPWORDS: &[&str] =
    &["said", "says", "would", "could", "should", "may", "might"];

/// Read-only set of lower-cased stopwords, built once per extractor.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordSet {
    /// English stopwords from the stop-words crate plus the supplementary list.
    pub fn english() -> Self {
        Self::english_with_extras(std::iter::empty::<String>())
    }

    /// English stopwords plus caller-supplied extras (case-folded on insert).
    pub fn english_with_extras<I, S>(extras: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let base: Vec<String> = get(LANGUAGE::English);
        let words = base
            .into_iter()
            .map(|w| w.to_lowercase())
            .chain(SUPPLEMENTARY_STOPWORDS.iter().map(|w| w.to_string()))
            .chain(
                extras
                    .into_iter()
                    .map(|w| w.as_ref().trim().to_lowercase())
                    .filter(|w| !w.is_empty()),
            )
            .collect();
        Self { words }
    }

    /// Build a set from an explicit word list only (no base list).
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Membership check against the case-folded word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_contains_function_words() {
        let set = StopwordSet::english();
        for w in ["the", "and", "is", "in", "it"] {
            assert!(set.contains(w), "{w} should be a stopword");
        }
    }

    #[test]
    fn test_supplementary_words_present() {
        let set = StopwordSet::english();
        for w in SUPPLEMENTARY_STOPWORDS {
            assert!(set.contains(w), "{w} should be a stopword");
        }
    }

    #[test]
    fn test_membership_is_case_folded() {
        let set = StopwordSet::english();
        assert!(set.contains("THE"));
        assert!(set.contains("Said"));
    }

    #[test]
    fn test_extras_are_added() {
        let set = StopwordSet::english_with_extras(["Recipe", "  ", "pasta "]);
        assert!(set.contains("recipe"));
        assert!(set.contains("pasta"));
        assert!(!set.contains(""));
        assert!(set.len() > StopwordSet::english().len());
    }

    #[test]
    fn test_from_words_has_no_base_list() {
        let set = StopwordSet::from_words(["foo"]);
        assert_eq!(set.len(), 1);
        assert!(!set.contains("the"));
    }
}
