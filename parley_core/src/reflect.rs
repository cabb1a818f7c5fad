//! Pronoun reflection for capture-group substitution.
//!
//! When a response template embeds part of the user's utterance, first and
//! second person forms are swapped ("i am" becomes "you are") so the reply
//! reads naturally. Longer phrases take precedence over their prefixes.

use once_cell::sync::Lazy;
use regex::Regex;

/// First/second person swaps, longest phrase first.
const REFLECTIONS: [(&str, &str); 16] = [
    ("i am", "you are"),
    ("i was", "you were"),
    ("i'm", "you are"),
    ("i'd", "you would"),
    ("i've", "you have"),
    ("i'll", "you will"),
    ("you are", "I am"),
    ("you were", "I was"),
    ("you've", "I have"),
    ("you'll", "I will"),
    ("i", "you"),
    ("my", "your"),
    ("your", "my"),
    ("yours", "mine"),
    ("you", "me"),
    ("me", "you"),
];

static REFLECT_RE: Lazy<Regex> = Lazy::new(|| {
    let mut keys: Vec<&str> = REFLECTIONS.iter().map(|(k, _)| *k).collect();
    // Longest first so "i am" is not shadowed by "i".
    keys.sort_by_key(|k| std::cmp::Reverse(k.len()));
    let alternatives = keys
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    #[allow(clippy::unwrap_used)]
    let re = Regex::new(&format!(r"\b(?:{alternatives})\b")).unwrap();
    re
});

fn lookup(phrase: &str) -> &'static str {
    REFLECTIONS
        .iter()
        .find(|(k, _)| *k == phrase)
        .map_or("", |(_, v)| v)
}

/// Swap person in a fragment of user text.
///
/// The fragment is lowercased before substitution, mirroring how the
/// pattern matcher sees it.
#[must_use]
pub fn reflect(fragment: &str) -> String {
    let lower = fragment.to_lowercase();
    REFLECT_RE
        .replace_all(&lower, |caps: &regex::Captures<'_>| {
            lookup(&caps[0]).to_string()
        })
        .into_owned()
}
