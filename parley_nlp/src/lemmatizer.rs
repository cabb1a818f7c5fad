//! Suffix-rule lemmatizer with irregular-form tables.
//!
//! Two entry points mirroring how the engine uses lemmas: [`noun`] is the
//! conservative form applied during normalization (mainly plural
//! stripping), [`verb`] recovers the base form of a verb for the fallback
//! response. Both are dictionary-free; rules only fire when the result is
//! plausibly a word, and both are idempotent.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Irregular plurals.
static NOUN_EXCEPTIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("men", "man"),
        ("women", "woman"),
        ("children", "child"),
        ("people", "person"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("mice", "mouse"),
        ("geese", "goose"),
    ])
});

/// s-final words that are already base forms.
const NOUN_KEEP: [&str; 16] = [
    "thanks", "news", "always", "perhaps", "yes", "his", "hers", "its", "this", "is", "was", "as",
    "us", "thus", "plus", "series",
];

/// Irregular verb forms (past and participle) to their base.
static VERB_EXCEPTIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("am", "be"),
        ("is", "be"),
        ("are", "be"),
        ("was", "be"),
        ("were", "be"),
        ("been", "be"),
        ("did", "do"),
        ("done", "do"),
        ("does", "do"),
        ("has", "have"),
        ("had", "have"),
        ("went", "go"),
        ("gone", "go"),
        ("goes", "go"),
        ("said", "say"),
        ("made", "make"),
        ("took", "take"),
        ("taken", "take"),
        ("came", "come"),
        ("saw", "see"),
        ("seen", "see"),
        ("knew", "know"),
        ("known", "know"),
        ("got", "get"),
        ("gotten", "get"),
        ("gave", "give"),
        ("given", "give"),
        ("found", "find"),
        ("thought", "think"),
        ("told", "tell"),
        ("became", "become"),
        ("left", "leave"),
        ("felt", "feel"),
        ("brought", "bring"),
        ("began", "begin"),
        ("begun", "begin"),
        ("kept", "keep"),
        ("held", "hold"),
        ("wrote", "write"),
        ("written", "write"),
        ("stood", "stand"),
        ("heard", "hear"),
        ("meant", "mean"),
        ("met", "meet"),
        ("ran", "run"),
        ("paid", "pay"),
        ("sat", "sit"),
        ("spoke", "speak"),
        ("spoken", "speak"),
        ("led", "lead"),
        ("grew", "grow"),
        ("grown", "grow"),
        ("lost", "lose"),
        ("fell", "fall"),
        ("fallen", "fall"),
        ("sent", "send"),
        ("built", "build"),
        ("understood", "understand"),
        ("drew", "draw"),
        ("drawn", "draw"),
        ("broke", "break"),
        ("broken", "break"),
        ("spent", "spend"),
        ("rose", "rise"),
        ("risen", "rise"),
        ("drove", "drive"),
        ("driven", "drive"),
        ("bought", "buy"),
        ("wore", "wear"),
        ("worn", "wear"),
        ("chose", "choose"),
        ("chosen", "choose"),
        ("ate", "eat"),
        ("eaten", "eat"),
        ("sang", "sing"),
        ("sung", "sing"),
        ("flew", "fly"),
        ("flown", "fly"),
        ("won", "win"),
    ])
});

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Noun lemma: strip plural suffixes.
///
/// Expects lowercase input (normalization lowercases first).
#[must_use]
pub fn noun(word: &str) -> String {
    if let Some(base) = NOUN_EXCEPTIONS.get(word) {
        return (*base).to_string();
    }
    if NOUN_KEEP.contains(&word) {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("sses") {
        return format!("{stem}ss");
    }
    if word.len() > 4 {
        if let Some(stem) = word.strip_suffix("ies") {
            return format!("{stem}y");
        }
    }
    for suffix in ["ches", "shes", "xes", "zes"] {
        if word.len() > suffix.len() + 1 && word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if word.len() > 3
        && word.ends_with('s')
        && !word.ends_with("'s")
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
    {
        return word[..word.len() - 1].to_string();
    }

    word.to_string()
}

/// Verb lemma: irregular table first, then suffix rules.
///
/// Expects lowercase input.
#[must_use]
pub fn verb(word: &str) -> String {
    if let Some(base) = VERB_EXCEPTIONS.get(word) {
        return (*base).to_string();
    }

    if word.len() > 5 {
        if let Some(stem) = word.strip_suffix("ing") {
            return undouble(stem);
        }
    }
    if word.len() > 4 {
        if let Some(stem) = word.strip_suffix("ied") {
            return format!("{stem}y");
        }
        if let Some(stem) = word.strip_suffix("ed") {
            return undouble(stem);
        }
    }
    if word.len() > 3 && word.ends_with('s') && !word.ends_with("'s") && !word.ends_with("ss") {
        if word.len() > 4 {
            if let Some(stem) = word.strip_suffix("ies") {
                return format!("{stem}y");
            }
        }
        for suffix in ["ches", "shes", "xes", "zes", "oes"] {
            if word.len() > suffix.len() + 1 && word.ends_with(suffix) {
                return word[..word.len() - 2].to_string();
            }
        }
        return word[..word.len() - 1].to_string();
    }

    word.to_string()
}

/// Undo consonant doubling after stripping an inflection ("runn" -> "run")
/// and restore a dropped final e after soft consonants ("danc" -> "dance").
fn undouble(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();

    if n >= 3 {
        let last = chars[n - 1];
        let prev = chars[n - 2];
        if last == prev && !is_vowel(last) && !matches!(last, 'l' | 's' | 'z') {
            return stem[..stem.len() - last.len_utf8()].to_string();
        }
        if matches!(last, 'c' | 'v' | 'u') {
            return format!("{stem}e");
        }
    }

    stem.to_string()
}
