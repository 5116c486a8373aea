// Candidate filter: nouns only, no stopwords, no short tokens.

use super::stopwords::StopwordSet;
use super::tagger::Tag;

/// Tokens this short or shorter are treated as noise.
pub const MIN_KEYWORD_CHARS: usize = 3;

/// Whether a tagged token is eligible for frequency ranking.
pub fn is_candidate(token: &str, tag: Tag, stopwords: &StopwordSet) -> bool {
    tag.is_noun() && !stopwords.contains(token) && token.chars().count() >= MIN_KEYWORD_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_all_noun_tags() {
        let stopwords = StopwordSet::from_words(["the"]);
        for tag in [Tag::Noun, Tag::NounPlural, Tag::ProperNoun, Tag::ProperNounPlural] {
            assert!(is_candidate("pasta", tag, &stopwords));
        }
    }

    #[test]
    fn test_rejects_non_nouns() {
        let stopwords = StopwordSet::from_words(Vec::<String>::new());
        for tag in [Tag::Verb, Tag::Adjective, Tag::Adverb, Tag::VerbGerund, Tag::Other] {
            assert!(!is_candidate("pasta", tag, &stopwords));
        }
    }

    #[test]
    fn test_rejects_stopwords_case_insensitively() {
        let stopwords = StopwordSet::from_words(["said"]);
        assert!(!is_candidate("said", Tag::Noun, &stopwords));
        assert!(!is_candidate("SAID", Tag::Noun, &stopwords));
    }

    #[test]
    fn test_length_boundary() {
        let stopwords = StopwordSet::from_words(Vec::<String>::new());
        assert!(!is_candidate("ox", Tag::Noun, &stopwords));
        assert!(is_candidate("cat", Tag::Noun, &stopwords));
        // Length counts characters, not bytes
        assert!(!is_candidate("éé", Tag::Noun, &stopwords));
    }
}
