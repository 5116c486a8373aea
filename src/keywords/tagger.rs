// Part-of-speech tagging: trait plus the default rule-based backend.
//
// Keyword extraction only needs to know which tokens are nouns, but the tag
// vocabulary follows the Penn Treebank so other backends (statistical
// taggers, remote services) can plug in and report their native tags.
//
// LexiconTagger works in one left-to-right pass: exact lexicon lookup first,
// then suffix rules, then a handful of context rules keyed on the previous
// token (auxiliaries, modals, determiners).

use std::collections::HashMap;

use anyhow::Result;

use super::lexicon;
use super::tokenizer::Token;

/// Penn Treebank part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// NN
    Noun,
    /// NNS
    NounPlural,
    /// NNP
    ProperNoun,
    /// NNPS
    ProperNounPlural,
    /// VB
    Verb,
    /// VBD
    VerbPast,
    /// VBG
    VerbGerund,
    /// VBN
    VerbParticiple,
    /// VBP
    VerbPresent,
    /// VBZ
    VerbThirdPerson,
    /// JJ
    Adjective,
    /// RB
    Adverb,
    /// DT
    Determiner,
    /// IN
    Preposition,
    /// CC
    Conjunction,
    /// PRP
    Pronoun,
    /// PRP$
    PossessivePronoun,
    /// MD
    Modal,
    /// TO
    To,
    /// CD
    Number,
    /// EX
    Existential,
    /// WDT / WP / WRB
    WhWord,
    /// Anything else (FW, SYM, UH, ...)
    Other,
}

impl Tag {
    /// The four noun tags: the only ones that admit a keyword candidate.
    pub fn is_noun(self) -> bool {
        matches!(
            self,
            Tag::Noun | Tag::NounPlural | Tag::ProperNoun | Tag::ProperNounPlural
        )
    }
}

/// A token paired with its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub token: Token,
    pub tag: Tag,
}

/// Trait for part-of-speech taggers.
///
/// Implementations must return exactly one tag per token, in input order.
/// A tagger is the only stage of keyword extraction allowed to fail (e.g.
/// a model file is missing); the error is passed straight to the caller.
pub trait PosTagger: Send + Sync {
    fn tag(&self, tokens: Vec<Token>) -> Result<Vec<TaggedToken>>;
}

/// Rule-based English tagger: lexicon lookup, suffix rules, context rules.
///
/// Works on lower-cased tokens, so it never emits the proper-noun tags;
/// capitalization is gone by the time tokens reach it.
pub struct LexiconTagger {
    lexicon: HashMap<&'static str, Tag>,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconTagger {
    pub fn new() -> Self {
        Self {
            lexicon: lexicon::entries().into_iter().collect(),
        }
    }

    /// Tag a single word given the previous word and its tag.
    fn tag_word(&self, word: &str, prev: Option<(&str, Tag)>) -> Tag {
        let prev_tag = prev.map(|(_, t)| t);
        let after_auxiliary =
            prev.is_some_and(|(w, _)| lexicon::AUXILIARY_WORDS.contains(&w));

        if word.chars().all(|c| c.is_numeric()) {
            return Tag::Number;
        }

        if let Some(&tag) = self.lexicon.get(word) {
            return match tag {
                // "the work", "my plan": a base verb after a determiner reads as a noun
                Tag::VerbPresent
                    if matches!(
                        prev_tag,
                        Some(Tag::Determiner | Tag::PossessivePronoun | Tag::Adjective)
                    ) =>
                {
                    Tag::Noun
                }
                Tag::VerbPresent if matches!(prev_tag, Some(Tag::Modal | Tag::To)) => Tag::Verb,
                Tag::Noun if prev_tag == Some(Tag::Modal) => Tag::Verb,
                other => other,
            };
        }

        let tag = self.tag_by_suffix(word, prev_tag, after_auxiliary);

        // Whatever follows a modal is a verb ("will cook", "might rain")
        if prev_tag == Some(Tag::Modal) && tag.is_noun() {
            return Tag::Verb;
        }
        tag
    }

    fn tag_by_suffix(&self, word: &str, prev_tag: Option<Tag>, after_auxiliary: bool) -> Tag {
        let len = word.chars().count();

        if len > 4 && word.ends_with("ly") {
            return Tag::Adverb;
        }

        if len > 5 && word.ends_with("ing") {
            // Progressive after "is/are/was..."; otherwise a gerund used as a noun
            return if after_auxiliary {
                Tag::VerbGerund
            } else {
                Tag::Noun
            };
        }

        if len > 4 && word.ends_with("ed") && !word.ends_with("eed") {
            return if after_auxiliary {
                Tag::VerbParticiple
            } else {
                Tag::VerbPast
            };
        }

        const ADJECTIVE_SUFFIXES: &[&str] =
            &["ous", "ful", "ive", "able", "ible", "less", "ish", "ical"];
        if len > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            return Tag::Adjective;
        }

        if len > 3
            && word.ends_with('s')
            && !["ss", "us", "is"].iter().any(|s| word.ends_with(s))
        {
            // "home provides", "it includes": third-person verb after a subject
            let subject_before = matches!(
                prev_tag,
                Some(Tag::Noun | Tag::NounPlural | Tag::Pronoun | Tag::ProperNoun)
            );
            if subject_before && self.is_verb_stem(word) {
                return Tag::VerbThirdPerson;
            }
            return Tag::NounPlural;
        }

        Tag::Noun
    }

    /// Whether `word` is a third-person form of a known base verb.
    fn is_verb_stem(&self, word: &str) -> bool {
        let is_base_verb = |stem: &str| lexicon::VERBS.contains(&stem);
        word.strip_suffix('s').is_some_and(is_base_verb)
            || word.strip_suffix("es").is_some_and(is_base_verb)
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, tokens: Vec<Token>) -> Result<Vec<TaggedToken>> {
        let mut tagged: Vec<TaggedToken> = Vec::with_capacity(tokens.len());
        for token in tokens {
            let prev = tagged.last().map(|t| (t.token.text.as_str(), t.tag));
            let tag = self.tag_word(&token.text, prev);
            tagged.push(TaggedToken { token, tag });
        }
        Ok(tagged)
    }
}
