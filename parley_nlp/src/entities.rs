//! Heuristic named-entity extraction.
//!
//! Capitalized token runs in the raw utterance become entities; small
//! gazetteers pick the label. A capitalized sentence opener only counts
//! when it is not an everyday word, so "Hello there" yields nothing but
//! "Alice called" yields a person.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use parley_core::{Entity, EntityLabel};

use crate::tokenizer;

static WEEKDAYS_AND_MONTHS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday", "january",
        "february", "march", "april", "may", "june", "july", "august", "september", "october",
        "november", "december", "today", "tomorrow", "yesterday",
    ])
});

static ORG_MARKERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "inc", "corp", "ltd", "llc", "co", "company", "university", "institute", "bank",
        "airlines", "labs",
    ])
});

static KNOWN_PLACES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "london", "paris", "tokyo", "berlin", "madrid", "rome", "moscow", "beijing", "delhi",
        "cairo", "sydney", "toronto", "chicago", "boston", "seattle", "america", "england",
        "france", "germany", "spain", "italy", "china", "india", "japan", "russia", "brazil",
        "canada", "australia", "egypt", "europe", "asia", "africa",
    ])
});

/// Everyday words whose capitalization at sentence start means nothing.
static COMMON_OPENERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "hello", "hi", "hey", "greetings", "thanks", "thank", "please", "yes", "no", "ok",
        "okay", "well", "so", "i", "you", "he", "she", "it", "we", "they", "the", "a", "an",
        "my", "your", "this", "that", "what", "who", "when", "where", "why", "how", "is", "are",
        "was", "were", "do", "does", "did", "can", "could", "will", "would", "tell", "give",
        "show", "find", "help", "let", "there", "here", "good", "sorry", "if", "and", "but",
        "not", "bye", "goodbye",
    ])
});

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn is_sentence_start(index: usize, tokens: &[String]) -> bool {
    if index == 0 {
        return true;
    }
    tokens
        .get(index - 1)
        .is_some_and(|prev| prev.contains(['.', '!', '?']))
}

fn label_for(run: &[&str]) -> EntityLabel {
    let lowered: Vec<String> = run.iter().map(|w| w.to_lowercase()).collect();

    if lowered
        .iter()
        .all(|w| WEEKDAYS_AND_MONTHS.contains(w.as_str()))
    {
        return EntityLabel::Date;
    }
    if lowered.iter().any(|w| ORG_MARKERS.contains(w.as_str())) {
        return EntityLabel::Org;
    }
    if lowered.iter().any(|w| KNOWN_PLACES.contains(w.as_str())) {
        return EntityLabel::Place;
    }
    EntityLabel::Person
}

/// Extract named entities from a raw (case-preserving) utterance.
#[must_use]
pub fn extract(text: &str) -> Vec<Entity> {
    fn flush(entities: &mut Vec<Entity>, run: &mut Vec<&str>) {
        if !run.is_empty() {
            entities.push(Entity::new(run.join(" "), label_for(run)));
            run.clear();
        }
    }

    let tokens = tokenizer::tokenize(text);
    let mut entities = Vec::new();
    let mut run: Vec<&str> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        let lower = token.to_lowercase();

        let candidate = if tokenizer::is_punctuation(token) || !is_capitalized(token) {
            false
        } else if is_sentence_start(i, &tokens) {
            !COMMON_OPENERS.contains(lower.as_str())
        } else {
            true
        };

        if candidate {
            run.push(token);
        } else {
            flush(&mut entities, &mut run);
        }

        // Pure numbers are entities of their own.
        if !candidate && token.chars().all(|c| c.is_ascii_digit()) {
            entities.push(Entity::new(token.clone(), EntityLabel::Number));
        }
    }
    flush(&mut entities, &mut run);

    entities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_has_no_entities() {
        assert!(extract("Hello there!").is_empty());
        assert!(extract("What is your name?").is_empty());
    }

    #[test]
    fn places_are_recognized() {
        let entities = extract("I flew to Paris last week");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].text, "Paris");
        assert_eq!(entities[0].label, EntityLabel::Place);
    }

    #[test]
    fn capitalized_runs_stay_together() {
        let entities = extract("ask Alice Smith about it");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].text, "Alice Smith");
        assert_eq!(entities[0].label, EntityLabel::Person);
    }

    #[test]
    fn org_markers_win_over_person() {
        let entities = extract("I work at Acme Corp");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].label, EntityLabel::Org);
    }

    #[test]
    fn dates_and_numbers() {
        let entities = extract("meet Bob on Friday at 10");
        let labels: Vec<EntityLabel> = entities.iter().map(|e| e.label).collect();
        assert!(labels.contains(&EntityLabel::Person));
        assert!(labels.contains(&EntityLabel::Date));
        assert!(labels.contains(&EntityLabel::Number));
    }

    #[test]
    fn sentence_initial_names_count() {
        let entities = extract("Alice called earlier.");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].text, "Alice");
    }
}
