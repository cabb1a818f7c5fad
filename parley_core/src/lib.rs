#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Core of the parley chatbot: the pattern table, the response matcher,
//! the fallback heuristic and the interactive session loop.
//!
//! Linguistic analysis (tokenization, lemmatization, tagging, named-entity
//! recognition) is behind the [`TextPipeline`] trait; `parley_nlp` provides
//! the default implementation.

use serde::{Deserialize, Serialize};

pub mod context;
pub mod engine;
pub mod matcher;
pub mod reflect;
pub mod rules;
pub mod session;

pub use context::ConversationContext;
pub use engine::{ChatEngine, EngineError};
pub use rules::{Rule, RuleDef, RuleError, RuleSet};
pub use session::{ChatSession, TurnOutcome};

/// Question words that trigger the fixed "interesting question" fallback.
pub const QUESTION_WORDS: [&str; 6] = ["who", "what", "when", "where", "why", "how"];

/// Coarse part-of-speech tag assigned by the pipeline's tagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosTag {
    Noun,
    Verb,
    /// Auxiliary and modal verbs ("is", "can", "would"). Kept distinct from
    /// [`PosTag::Verb`] so the fallback never treats a bare auxiliary as the
    /// root action of the utterance.
    Auxiliary,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Number,
    Punctuation,
    Other,
}

impl PosTag {
    /// Whether tokens with this tag are dropped during normalization.
    #[must_use]
    pub const fn is_punctuation(self) -> bool {
        matches!(self, Self::Punctuation)
    }
}

/// A single analyzed token of an utterance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    /// Surface form as it appeared in the input.
    pub text: String,
    /// Base form (noun lemma in normalization, verb lemma for root verbs).
    pub lemma: String,
    pub pos: PosTag,
    /// True for the token the parser considers the root of the utterance.
    pub is_root: bool,
}

/// Result of a full linguistic analysis of one utterance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Analysis {
    pub tokens: Vec<Token>,
}

impl Analysis {
    /// True if any token's lowercase surface form is a question word.
    #[must_use]
    pub fn has_question_word(&self) -> bool {
        self.tokens
            .iter()
            .any(|t| QUESTION_WORDS.contains(&t.text.to_lowercase().as_str()))
    }

    /// First root token tagged as a full verb, in parse order.
    #[must_use]
    pub fn root_verb(&self) -> Option<&Token> {
        self.tokens
            .iter()
            .find(|t| t.is_root && t.pos == PosTag::Verb)
    }
}

/// Label assigned to a recognized named entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
    Person,
    Place,
    Org,
    Date,
    Number,
    Other,
}

/// A named entity span extracted from a raw utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

impl Entity {
    #[must_use]
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// Language analysis consumed by the chat engine.
///
/// Implementations are external collaborators as far as the engine is
/// concerned; the engine only relies on the shapes returned here.
pub trait TextPipeline: Send + Sync {
    /// Analyze one utterance into tagged tokens.
    fn analyze(&self, text: &str) -> anyhow::Result<Analysis>;

    /// Named entities found in the raw (non-normalized) utterance.
    fn entities(&self, text: &str) -> anyhow::Result<Vec<Entity>>;

    /// Normalize an utterance for pattern matching: lowercase, tokenize,
    /// lemmatize, drop punctuation tokens and rejoin with single spaces.
    ///
    /// Empty input yields empty output. Normalizing an already normalized
    /// string yields the same string.
    fn normalize(&self, text: &str) -> anyhow::Result<String> {
        let analysis = self.analyze(&text.to_lowercase())?;
        let words: Vec<&str> = analysis
            .tokens
            .iter()
            .filter(|t| !t.pos.is_punctuation())
            .map(|t| t.lemma.as_str())
            .collect();
        Ok(words.join(" "))
    }
}

impl<P: TextPipeline + ?Sized> TextPipeline for &P {
    fn analyze(&self, text: &str) -> anyhow::Result<Analysis> {
        (**self).analyze(text)
    }

    fn entities(&self, text: &str) -> anyhow::Result<Vec<Entity>> {
        (**self).entities(text)
    }

    fn normalize(&self, text: &str) -> anyhow::Result<String> {
        (**self).normalize(text)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    struct FixedPipeline(Vec<Token>);

    impl TextPipeline for FixedPipeline {
        fn analyze(&self, _text: &str) -> anyhow::Result<Analysis> {
            Ok(Analysis {
                tokens: self.0.clone(),
            })
        }

        fn entities(&self, _text: &str) -> anyhow::Result<Vec<Entity>> {
            Ok(Vec::new())
        }
    }

    fn token(text: &str, pos: PosTag) -> Token {
        Token {
            text: text.to_string(),
            lemma: text.to_string(),
            pos,
            is_root: false,
        }
    }

    #[test]
    fn question_word_detection_is_case_insensitive() {
        let analysis = Analysis {
            tokens: vec![token("WHERE", PosTag::Other), token("city", PosTag::Noun)],
        };
        assert!(analysis.has_question_word());
    }

    #[test]
    fn root_verb_skips_non_root_verbs() {
        let mut run = token("run", PosTag::Verb);
        run.is_root = true;
        let analysis = Analysis {
            tokens: vec![token("want", PosTag::Verb), run],
        };
        assert_eq!(analysis.root_verb().unwrap().text, "run");
    }

    #[test]
    fn default_normalize_drops_punctuation_tokens() {
        let pipeline = FixedPipeline(vec![
            token("hello", PosTag::Other),
            token(",", PosTag::Punctuation),
            token("there", PosTag::Adverb),
        ]);
        assert_eq!(pipeline.normalize("Hello, there").unwrap(), "hello there");
    }
}
