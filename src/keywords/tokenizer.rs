// Tokenizer: lower-case, strip punctuation, split on whitespace.
//
// Punctuation is replaced with a space rather than deleted so that
// "end.Start" becomes two tokens instead of "endstart".

/// A normalized word and its position in the token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lower-cased, punctuation-free text
    pub text: String,
    /// Zero-based index of this token in the source text's token stream
    pub position: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, position: usize) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }
}

/// Word characters: Unicode letters and digits plus underscore.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Normalize `text` and split it into word tokens, in source order.
///
/// Duplicates are kept; counting happens later in the ranker. Empty or
/// whitespace-only input yields an empty vector.
pub fn normalize_and_tokenize(text: &str) -> Vec<Token> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if is_word_char(c) || c.is_whitespace() { c } else { ' ' })
        .collect();

    cleaned
        .split_whitespace()
        .enumerate()
        .map(|(position, word)| Token::new(word, position))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_lowercases_and_splits() {
        let tokens = normalize_and_tokenize("The Chef prepared PASTA");
        assert_eq!(texts(&tokens), vec!["the", "chef", "prepared", "pasta"]);
    }

    #[test]
    fn test_punctuation_does_not_merge_words() {
        let tokens = normalize_and_tokenize("herbs.The pasta,cooked!");
        assert_eq!(texts(&tokens), vec!["herbs", "the", "pasta", "cooked"]);
    }

    #[test]
    fn test_positions_follow_source_order() {
        let tokens = normalize_and_tokenize("a b a");
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
        assert_eq!(texts(&tokens), vec!["a", "b", "a"]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(normalize_and_tokenize("").is_empty());
        assert!(normalize_and_tokenize("   \n\t   ").is_empty());
    }

    #[test]
    fn test_punctuation_only() {
        assert!(normalize_and_tokenize("!!! ... ???").is_empty());
    }

    #[test]
    fn test_unicode_letters_survive() {
        let tokens = normalize_and_tokenize("Café naïve_user — résumé");
        assert_eq!(texts(&tokens), vec!["café", "naïve_user", "résumé"]);
    }
}
