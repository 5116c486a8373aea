// Word lists backing the rule-based tagger.
//
// Closed-class words (determiners, prepositions, pronouns, auxiliaries) are
// listed exhaustively enough for English prose. Open-class lists only carry
// common words whose suffix would otherwise mislead the suffix rules.

use super::tagger::Tag;

pub const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "every", "each", "some", "any", "no",
    "another", "either", "neither", "all", "both", "half", "such",
];

pub const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "from", "about", "into", "through", "during",
    "before", "after", "above", "below", "between", "under", "over", "without", "within",
    "among", "against", "along", "around", "across", "behind", "beyond", "near", "since",
    "until", "upon", "toward", "towards", "via", "per", "despite", "like", "than", "because",
    "if", "while", "whether", "although", "though", "unless", "as", "off", "out", "up", "down",
    "onto", "throughout", "inside", "outside", "beside", "besides",
];

pub const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "yet", "so", "plus"];

pub const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "yourselves", "themselves",
    "someone", "everyone", "anyone", "nobody", "everybody", "somebody", "anybody", "something",
    "anything", "nothing", "everything", "mine", "yours", "hers", "ours", "theirs",
];

pub const POSSESSIVES: &[&str] = &["my", "your", "his", "her", "its", "our", "their"];

pub const MODALS: &[&str] = &[
    "can", "could", "will", "would", "shall", "should", "may", "might", "must",
];

pub const WH_WORDS: &[&str] = &["what", "which", "who", "whom", "whose", "where", "when", "why", "how"];

pub const ADVERBS: &[&str] = &[
    "not", "very", "also", "just", "then", "now", "here", "too", "still", "never", "always",
    "often", "even", "well", "again", "soon", "already", "ever", "only", "really", "almost",
    "quite", "rather", "perhaps", "maybe", "sometimes", "together", "away", "back", "instead",
    "however", "therefore", "thus", "later", "once", "twice", "else", "further", "indeed",
    "otherwise", "anyway", "meanwhile", "fast", "hard", "far", "enough",
];

pub const ADJECTIVES: &[&str] = &[
    "good", "new", "first", "last", "long", "great", "little", "own", "other", "old", "right",
    "big", "high", "different", "small", "large", "next", "early", "young", "important", "few",
    "public", "bad", "same", "able", "fresh", "free", "full", "sure", "real", "best", "better",
    "easy", "strong", "clear", "whole", "true", "recent", "certain", "low", "open", "late",
    "local", "popular", "simple", "happy", "poor", "common", "general", "main", "major",
    "nice", "green", "red", "blue", "black", "white", "hot", "cold", "warm", "quick", "slow",
    "many", "much", "more", "most", "several", "less", "least", "various", "social", "human",
    "natural", "physical", "personal", "final", "special", "possible", "available", "likely",
    "sustainable", "urban", "rural", "healthy", "tasty", "sweet", "sour", "bitter", "rich",
    "deep", "dark", "bright", "short", "tall", "wide", "huge", "tiny", "entire", "perfect",
    "ready", "busy", "safe", "serious", "difficult", "current", "previous", "similar",
    "private", "global", "national", "international", "modern", "traditional", "positive",
    "negative", "neutral", "key", "basic", "complete", "direct", "due", "fine", "fair",
];

/// Base-form verbs, tagged VBP by default and VB after a modal or "to".
pub const VERBS: &[&str] = &[
    "make", "get", "go", "take", "come", "see", "know", "think", "look", "want", "give", "use",
    "find", "tell", "ask", "seem", "feel", "try", "leave", "call", "include", "provide",
    "become", "begin", "keep", "bring", "hold", "stand", "write", "help", "show", "hear",
    "allow", "create", "grow", "offer", "remember", "consider", "appear", "buy", "serve",
    "send", "expect", "build", "stay", "reach", "remain", "suggest", "raise", "sell",
    "require", "decide", "prepare", "share", "say", "mean", "let", "put", "happen", "believe",
    "understand", "lead", "meet", "pay", "speak", "lose", "add", "spend", "win", "learn",
    "change", "follow", "continue", "improve", "reduce", "increase", "explain", "develop",
    "carry", "enjoy", "eat", "drink", "choose", "seek", "cause", "depend", "exist", "involve",
    "produce", "receive", "contain", "describe", "discuss", "encourage", "ensure", "promote",
];

pub const PAST_VERBS: &[&str] = &[
    "went", "made", "took", "came", "saw", "knew", "thought", "gave", "found", "told", "felt",
    "left", "became", "began", "kept", "brought", "bought", "held", "stood", "ran", "wrote",
    "got", "grew", "heard", "meant", "met", "paid", "sat", "spoke", "led", "lost", "sent",
    "built", "understood", "fell", "chose", "drove", "ate", "drew", "did",
];

pub const PARTICIPLES: &[&str] = &[
    "gone", "taken", "seen", "known", "given", "written", "grown", "eaten", "chosen", "driven",
    "spoken", "fallen", "begun", "drawn", "done", "been",
];

pub const NUMBER_WORDS: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "twenty", "thirty", "forty", "fifty", "hundred", "thousand", "million",
    "billion",
];

/// Nouns the suffix rules would otherwise misread (-ly, -ing, -ive, -able, -s).
pub const NOUNS: &[&str] = &[
    "family", "supply", "reply", "assembly", "anomaly", "monopoly", "ally", "belly", "jelly",
    "butterfly", "thing", "king", "ring", "string", "spring", "morning", "evening", "building",
    "ceiling", "wedding", "pudding", "olive", "archive", "native", "detective", "executive",
    "objective", "initiative", "representative", "table", "vegetable", "cable", "variable",
    "bible", "news", "series", "species", "physics", "mathematics", "economics", "politics",
    "ethics", "lens", "gas", "care", "work", "need", "plan", "home", "cooking", "living",
];

/// Forms of "be", "have" and "do" with their specific tags.
pub const AUXILIARIES: &[(&str, Tag)] = &[
    ("is", Tag::VerbThirdPerson),
    ("are", Tag::VerbPresent),
    ("am", Tag::VerbPresent),
    ("was", Tag::VerbPast),
    ("were", Tag::VerbPast),
    ("be", Tag::Verb),
    ("been", Tag::VerbParticiple),
    ("being", Tag::VerbGerund),
    ("has", Tag::VerbThirdPerson),
    ("have", Tag::VerbPresent),
    ("had", Tag::VerbPast),
    ("having", Tag::VerbGerund),
    ("does", Tag::VerbThirdPerson),
    ("do", Tag::VerbPresent),
    ("did", Tag::VerbPast),
    ("doing", Tag::VerbGerund),
];

/// Auxiliaries after which "-ing"/"-ed" words read as verbs.
pub const AUXILIARY_WORDS: &[&str] = &[
    "is", "are", "am", "was", "were", "be", "been", "being", "has", "have", "had", "having",
];

/// All lexicon entries. Later entries override earlier ones, so closed
/// classes come last and win over open-class lists.
pub fn entries() -> Vec<(&'static str, Tag)> {
    let mut out = Vec::new();
    let groups: [(&[&str], Tag); 13] = [
        (NOUNS, Tag::Noun),
        (ADJECTIVES, Tag::Adjective),
        (VERBS, Tag::VerbPresent),
        (PAST_VERBS, Tag::VerbPast),
        (PARTICIPLES, Tag::VerbParticiple),
        (ADVERBS, Tag::Adverb),
        (NUMBER_WORDS, Tag::Number),
        (PREPOSITIONS, Tag::Preposition),
        (CONJUNCTIONS, Tag::Conjunction),
        (DETERMINERS, Tag::Determiner),
        (PRONOUNS, Tag::Pronoun),
        (POSSESSIVES, Tag::PossessivePronoun),
        (WH_WORDS, Tag::WhWord),
    ];
    for (words, tag) in groups {
        out.extend(words.iter().map(|w| (*w, tag)));
    }
    out.extend(MODALS.iter().map(|w| (*w, Tag::Modal)));
    out.extend(AUXILIARIES.iter().copied());
    out.push(("there", Tag::Existential));
    out.push(("to", Tag::To));
    out
}
