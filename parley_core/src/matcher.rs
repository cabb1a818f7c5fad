//! Response selection over the pattern table.
//!
//! First matching rule wins; one of its candidate responses is drawn
//! uniformly at random, then `%n` placeholders are expanded with the
//! reflected text of capture group *n*.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::reflect::reflect;
use crate::rules::RuleSet;

/// Select a response for a normalized utterance.
///
/// Returns `None` when no rule matches. A well-formed [`RuleSet`] ends in
/// a catch-all so this is not observed in practice, but callers must treat
/// it as a real case: the chat engine routes it to the fallback heuristic.
#[must_use]
pub fn select_response(rules: &RuleSet, normalized: &str) -> Option<String> {
    select_response_with(rules, normalized, &mut rand::thread_rng())
}

/// Same as [`select_response`], with an explicit random source.
pub fn select_response_with<R: Rng>(
    rules: &RuleSet,
    normalized: &str,
    rng: &mut R,
) -> Option<String> {
    let (rule, caps) = rules.first_match(normalized)?;
    debug!(pattern = rule.pattern(), "rule matched");

    let template = rule.responses().choose(rng)?;
    Some(expand(template, &caps))
}

/// Expand `%1`..`%9` placeholders with reflected capture-group text.
fn expand(template: &str, caps: &regex::Captures<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek().and_then(|d| d.to_digit(10)) {
            Some(n) if n > 0 => {
                chars.next();
                let group = caps
                    .get(n as usize)
                    .map(|m| m.as_str())
                    .unwrap_or_default();
                out.push_str(&reflect(group));
            }
            _ => out.push(c),
        }
    }

    out
}
