//! Lexicon-driven part-of-speech tagger with root-verb detection.
//!
//! Closed word classes come from small lexicons; open classes fall back to
//! suffix heuristics with noun as the default. The "dependency parse" is
//! deliberately shallow: the first full verb that is not an auxiliary is
//! marked as the root of the utterance, which is all the fallback
//! heuristic needs.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use parley_core::{Analysis, PosTag, Token};

use crate::lemmatizer;
use crate::tokenizer;

static AUXILIARIES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "am", "is", "are", "was", "were", "be", "been", "being", "do", "does", "did", "have",
        "has", "had", "will", "would", "shall", "should", "can", "could", "may", "might", "must",
        "won't", "don't", "doesn't", "didn't", "can't", "couldn't", "wouldn't", "shouldn't",
        "isn't", "aren't", "wasn't", "weren't",
    ])
});

static PRONOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my",
        "your", "his", "its", "our", "their", "mine", "yours", "hers", "ours", "theirs",
        "myself", "yourself", "who", "whom", "what", "which", "something", "anything", "nothing",
        "everything", "someone", "anyone", "everyone",
    ])
});

static DETERMINERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "the", "a", "an", "this", "that", "these", "those", "some", "any", "no", "every", "each",
        "all", "both", "few", "many", "much", "more", "most", "other", "another",
    ])
});

static PREPOSITIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "in", "on", "at", "to", "for", "with", "of", "from", "by", "about", "into", "over",
        "under", "after", "before", "between", "through", "during", "without", "against", "up",
        "down", "off", "out",
    ])
});

static CONJUNCTIONS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["and", "or", "but", "so", "because", "if", "while", "although"]));

/// Common base-form verbs not recoverable by suffix alone.
static COMMON_VERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "want", "need", "go", "make", "get", "help", "provide", "tell", "know", "think", "see",
        "come", "take", "find", "give", "use", "work", "call", "try", "ask", "feel", "leave",
        "put", "mean", "keep", "let", "begin", "seem", "talk", "turn", "start", "show", "hear",
        "play", "run", "move", "like", "love", "believe", "hold", "bring", "happen", "write",
        "sit", "stand", "lose", "pay", "meet", "learn", "change", "lead", "understand", "watch",
        "follow", "stop", "create", "speak", "read", "spend", "grow", "open", "walk", "win",
        "offer", "remember", "consider", "buy", "wait", "serve", "send", "expect", "build",
        "stay", "fall", "cut", "reach", "book", "order", "cancel", "schedule", "check", "search",
        "explain", "translate", "dance", "sing", "eat", "drink", "sleep", "travel", "visit",
        "fix", "install", "download", "upload", "delete", "update",
    ])
});

/// Words that end like an inflected verb but are not one.
static FALSE_INFLECTIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "morning", "evening", "ceiling", "clothing", "wedding", "during", "speed", "feed",
        "seed", "deed", "weed", "breed", "indeed", "naked", "sacred", "hundred", "wicked",
    ])
});

/// Verb forms of the irregular table, recognized in inflected form.
fn is_inflected_verb(lower: &str) -> bool {
    if FALSE_INFLECTIONS.contains(lower) {
        return false;
    }
    if lower.len() > 5 && lower.ends_with("ing") {
        return true;
    }
    if lower.len() > 4 && lower.ends_with("ed") {
        return true;
    }
    let base = lemmatizer::verb(lower);
    base != lower && COMMON_VERBS.contains(base.as_str())
}

const ADJECTIVE_SUFFIXES: [&str; 6] = ["ous", "ful", "ive", "able", "ible", "less"];

fn tag_word(lower: &str) -> PosTag {
    if lower.chars().all(|c| c.is_ascii_digit()) {
        return PosTag::Number;
    }
    if AUXILIARIES.contains(lower) {
        return PosTag::Auxiliary;
    }
    if PRONOUNS.contains(lower) {
        return PosTag::Pronoun;
    }
    if DETERMINERS.contains(lower) {
        return PosTag::Determiner;
    }
    if PREPOSITIONS.contains(lower) {
        return PosTag::Preposition;
    }
    if CONJUNCTIONS.contains(lower) {
        return PosTag::Conjunction;
    }
    if COMMON_VERBS.contains(lower) || is_inflected_verb(lower) {
        return PosTag::Verb;
    }
    if lower.len() > 3 && lower.ends_with("ly") {
        return PosTag::Adverb;
    }
    if ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return PosTag::Adjective;
    }
    PosTag::Noun
}

/// Tokenize and tag one utterance.
#[must_use]
pub fn analyze(text: &str) -> Analysis {
    let mut tokens = Vec::new();
    let mut root_assigned = false;

    for word in tokenizer::tokenize(text) {
        let lower = word.to_lowercase();

        let (pos, lemma) = if tokenizer::is_punctuation(&word) {
            (PosTag::Punctuation, lower)
        } else {
            let pos = tag_word(&lower);
            let lemma = match pos {
                PosTag::Verb => lemmatizer::verb(&lower),
                PosTag::Noun => lemmatizer::noun(&lower),
                _ => lower,
            };
            (pos, lemma)
        };

        let is_root = pos == PosTag::Verb && !root_assigned;
        if is_root {
            root_assigned = true;
        }

        tokens.push(Token {
            text: word,
            lemma,
            pos,
            is_root,
        });
    }

    Analysis { tokens }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn tags(text: &str) -> Vec<(String, PosTag)> {
        analyze(text)
            .tokens
            .into_iter()
            .map(|t| (t.text, t.pos))
            .collect()
    }

    #[test]
    fn closed_classes_are_tagged_from_lexicons() {
        let tagged = tags("I can help you");
        assert_eq!(tagged[0].1, PosTag::Pronoun);
        assert_eq!(tagged[1].1, PosTag::Auxiliary);
        assert_eq!(tagged[2].1, PosTag::Verb);
        assert_eq!(tagged[3].1, PosTag::Pronoun);
    }

    #[test]
    fn first_full_verb_is_the_root() {
        let analysis = analyze("I want to book a flight");
        let root = analysis.root_verb().unwrap();
        assert_eq!(root.text, "want");
        assert_eq!(root.lemma, "want");
    }

    #[test]
    fn auxiliaries_are_never_the_root() {
        let analysis = analyze("it is blue");
        assert!(analysis.root_verb().is_none());
    }

    #[test]
    fn inflected_verbs_get_base_lemmas() {
        let analysis = analyze("She was dancing");
        let root = analysis.root_verb().unwrap();
        assert_eq!(root.text, "dancing");
        assert_eq!(root.lemma, "dance");
    }

    #[test]
    fn question_words_are_visible_to_the_analysis() {
        assert!(analyze("Where is the station").has_question_word());
        assert!(analyze("tell me a story").root_verb().is_some());
        assert!(!analyze("a nice day").has_question_word());
    }

    #[test]
    fn numbers_and_punctuation() {
        let tagged = tags("wait, 42!");
        assert_eq!(tagged[1].1, PosTag::Punctuation);
        assert_eq!(tagged[2].1, PosTag::Number);
    }
}
