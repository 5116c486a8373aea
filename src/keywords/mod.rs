// Keyword extraction: tokenize, tag, filter, rank.
//
// Runs entirely locally alongside the LLM call. The extractor is built once
// (stopword set included) and shared read-only across requests.

pub mod extractor;
pub mod filter;
pub mod lexicon;
pub mod ranker;
pub mod stopwords;
pub mod tagger;
pub mod tokenizer;

pub use extractor::{KeywordExtractor, DEFAULT_TOP_N};
pub use stopwords::StopwordSet;
pub use tagger::{LexiconTagger, PosTagger, Tag, TaggedToken};
pub use tokenizer::{normalize_and_tokenize, Token};
