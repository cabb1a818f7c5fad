//! The chat engine: normalize, match, fall back.
//!
//! One [`ChatEngine::respond`] call is one conversation turn. The engine
//! normalizes the utterance, records any named entities into the context
//! slot, runs the pattern table, and only when no rule yields a response
//! applies the part-of-speech fallback heuristic over the raw utterance.

use thiserror::Error;
use tracing::{debug, info};

use crate::context::ConversationContext;
use crate::matcher;
use crate::rules::{RuleError, RuleSet};
use crate::TextPipeline;

const QUESTION_FALLBACK: &str =
    "That's an interesting question. I might not have the full answer, but I can try to help.";
const LEARNING_FALLBACK: &str =
    "I'm still learning. Could you rephrase that or ask me something else?";

/// Errors surfaced from a single conversation turn.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("language pipeline error: {0}")]
    Pipeline(#[from] anyhow::Error),
}

/// Rule-based responder with an NLP fallback.
pub struct ChatEngine<P> {
    rules: RuleSet,
    pipeline: P,
    context: ConversationContext,
}

impl<P: TextPipeline> ChatEngine<P> {
    #[must_use]
    pub fn new(pipeline: P, rules: RuleSet) -> Self {
        info!(rules = rules.len(), "chat engine ready");
        Self {
            rules,
            pipeline,
            context: ConversationContext::new(),
        }
    }

    /// Engine over the built-in rule table.
    ///
    /// # Errors
    /// Returns a [`RuleError`] if the built-in table fails to compile,
    /// which does not happen in practice.
    pub fn with_builtin_rules(pipeline: P) -> Result<Self, RuleError> {
        Ok(Self::new(pipeline, RuleSet::builtin()?))
    }

    /// Produce a response for one raw utterance.
    pub fn respond(&mut self, raw: &str) -> Result<String, EngineError> {
        let normalized = self.pipeline.normalize(raw)?;
        debug!(normalized = %normalized, "normalized utterance");

        // Entity extraction runs over the raw text; a non-empty result
        // overwrites the context slot.
        let entities = self.pipeline.entities(raw)?;
        if !entities.is_empty() {
            debug!(count = entities.len(), "entities extracted");
            self.context.remember_entities(entities);
        }

        if let Some(reply) = matcher::select_response(&self.rules, &normalized) {
            return Ok(reply);
        }

        self.fallback(raw)
    }

    /// Heuristic response when no rule matched.
    ///
    /// Analysis runs over the raw utterance, not the normalized one, so
    /// the tagger sees the original word forms.
    fn fallback(&self, raw: &str) -> Result<String, EngineError> {
        let analysis = self.pipeline.analyze(raw)?;

        if analysis.has_question_word() {
            debug!("fallback: question word detected");
            return Ok(QUESTION_FALLBACK.to_string());
        }

        if let Some(verb) = analysis.root_verb() {
            debug!(verb = %verb.lemma, "fallback: root verb detected");
            return Ok(format!(
                "I understand you want to {}. Can you provide more details?",
                verb.lemma
            ));
        }

        Ok(LEARNING_FALLBACK.to_string())
    }

    #[must_use]
    pub const fn context(&self) -> &ConversationContext {
        &self.context
    }

    #[must_use]
    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }
}
