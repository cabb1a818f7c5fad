//! Single-slot conversation context.
//!
//! Holds the most recently extracted named entities. The slot is
//! overwritten on every turn that yields entities and is never cleared.
//! Nothing reads it back to alter matching yet; it is kept for parity with
//! the extractor's side effect and is logged when an interactive chat ends.

use chrono::{DateTime, Utc};

use crate::Entity;

/// Last-seen named entities of the conversation.
#[derive(Debug, Clone, Default)]
pub struct ConversationContext {
    entities: Option<Vec<Entity>>,
    updated_at: Option<DateTime<Utc>>,
}

impl ConversationContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the slot with a non-empty entity list.
    ///
    /// Empty lists are ignored so a turn without entities leaves the
    /// previous ones visible.
    pub fn remember_entities(&mut self, entities: Vec<Entity>) {
        if entities.is_empty() {
            return;
        }
        self.entities = Some(entities);
        self.updated_at = Some(Utc::now());
    }

    /// Entities from the most recent turn that produced any.
    #[must_use]
    pub fn last_entities(&self) -> Option<&[Entity]> {
        self.entities.as_deref()
    }

    /// When the slot was last overwritten.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::EntityLabel;

    #[test]
    fn empty_extraction_leaves_slot_unchanged() {
        let mut ctx = ConversationContext::new();
        ctx.remember_entities(vec![Entity::new("Paris", EntityLabel::Place)]);
        ctx.remember_entities(Vec::new());

        let entities = ctx.last_entities().unwrap();
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].text, "Paris");
    }

    #[test]
    fn non_empty_extraction_overwrites() {
        let mut ctx = ConversationContext::new();
        ctx.remember_entities(vec![Entity::new("Paris", EntityLabel::Place)]);
        ctx.remember_entities(vec![Entity::new("Alice", EntityLabel::Person)]);

        let entities = ctx.last_entities().unwrap();
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].label, EntityLabel::Person);
    }

    #[test]
    fn starts_empty() {
        let ctx = ConversationContext::new();
        assert!(ctx.last_entities().is_none());
        assert!(ctx.updated_at().is_none());
    }
}
