//! The default [`TextPipeline`] implementation.

use parley_core::{Analysis, Entity, TextPipeline};
use tracing::debug;

use crate::{entities, tagger};

/// Dictionary-free pipeline built from the tokenizer, lemmatizer, tagger
/// and entity extractor of this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicPipeline;

impl HeuristicPipeline {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// One-line description for diagnostics output.
    #[must_use]
    pub const fn describe() -> &'static str {
        "rule-based tokenizer, suffix lemmatizer, lexicon tagger, gazetteer NER"
    }
}

impl TextPipeline for HeuristicPipeline {
    fn analyze(&self, text: &str) -> anyhow::Result<Analysis> {
        let analysis = tagger::analyze(text);
        debug!(tokens = analysis.tokens.len(), "analyzed utterance");
        Ok(analysis)
    }

    fn entities(&self, text: &str) -> anyhow::Result<Vec<Entity>> {
        Ok(entities::extract(text))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn normalization_lowercases_lemmatizes_and_strips_punctuation() {
        let pipeline = HeuristicPipeline::new();
        assert_eq!(
            pipeline.normalize("Hello, World!").unwrap(),
            "hello world"
        );
        assert_eq!(pipeline.normalize("").unwrap(), "");
    }

    #[test]
    fn normalization_is_idempotent() {
        let pipeline = HeuristicPipeline::new();
        for input in [
            "Hello, how are you?",
            "What is the weather today?",
            "I need some help!",
            "asdljasd",
            "Do you know my name...",
            "How's it going?",
            "That is John's notebook!",
            "the dogs' toys",
        ] {
            let once = pipeline.normalize(input).unwrap();
            let twice = pipeline.normalize(&once).unwrap();
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn analysis_sees_raw_forms() {
        let pipeline = HeuristicPipeline::new();
        let analysis = pipeline.analyze("I want to dance").unwrap();
        let root = analysis.root_verb().unwrap();
        assert_eq!(root.lemma, "want");
    }

    #[test]
    fn entities_come_from_the_raw_text() {
        let pipeline = HeuristicPipeline::new();
        let found = pipeline.entities("my trip to Tokyo").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "Tokyo");
    }
}
