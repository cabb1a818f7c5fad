//! The pattern table: ordered regex rules mapped to candidate responses.
//!
//! Rules can be loaded from configuration as [`RuleDef`] values rather than
//! hardcoded; [`builtin_defs`] supplies the default table. Order matters:
//! the matcher takes the first rule whose pattern matches, and the final
//! rule is always a catch-all so a response can always be produced.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Pattern of the terminal catch-all rule.
pub const CATCH_ALL_PATTERN: &str = "(.*)";

/// Errors raised while building a rule table.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid regex `{pattern}`: {source}")]
    Regex {
        pattern: String,
        source: regex::Error,
    },

    #[error("rule `{0}` has an empty response set")]
    EmptyResponses(String),
}

/// Definition of a single rule, as it appears in configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleDef {
    /// Regex matched against the normalized utterance.
    pub pattern: String,

    /// Candidate responses; one is chosen uniformly at random. `%1`..`%9`
    /// expand to the reflected text of the corresponding capture group.
    pub responses: Vec<String>,
}

impl RuleDef {
    #[must_use]
    pub fn new(pattern: &str, responses: &[&str]) -> Self {
        Self {
            pattern: pattern.to_string(),
            responses: responses.iter().map(ToString::to_string).collect(),
        }
    }

    /// Compile into a [`Rule`].
    ///
    /// Patterns are anchored at the start of the input and matched
    /// case-insensitively.
    ///
    /// # Errors
    /// Returns an error if the regex is invalid or the response set is empty.
    pub fn build(&self) -> Result<Rule, RuleError> {
        if self.responses.is_empty() {
            return Err(RuleError::EmptyResponses(self.pattern.clone()));
        }

        let regex = RegexBuilder::new(&format!("^(?:{})", self.pattern))
            .case_insensitive(true)
            .build()
            .map_err(|source| RuleError::Regex {
                pattern: self.pattern.clone(),
                source,
            })?;

        Ok(Rule {
            pattern: self.pattern.clone(),
            regex,
            responses: self.responses.clone(),
        })
    }
}

/// A compiled rule.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: String,
    regex: Regex,
    responses: Vec<String>,
}

impl Rule {
    /// Source pattern as written in the definition.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn responses(&self) -> &[String] {
        &self.responses
    }

    /// Whether this rule is the terminal catch-all.
    #[must_use]
    pub fn is_catch_all(&self) -> bool {
        self.pattern == CATCH_ALL_PATTERN
    }

    /// Match the rule against a normalized utterance.
    #[must_use]
    pub fn captures<'t>(&self, input: &'t str) -> Option<regex::Captures<'t>> {
        self.regex.captures(input)
    }
}

/// Ordered table of compiled rules. The last rule is always a catch-all.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build a table from definitions, preserving order.
    ///
    /// If the final definition is not a catch-all, the built-in catch-all is
    /// appended so the table upholds its always-responds guarantee.
    ///
    /// # Errors
    /// Returns the first [`RuleError`] encountered while compiling.
    pub fn from_defs(defs: &[RuleDef]) -> Result<Self, RuleError> {
        let mut rules = defs
            .iter()
            .map(RuleDef::build)
            .collect::<Result<Vec<_>, _>>()?;

        if rules.last().is_none_or(|rule| !rule.is_catch_all()) {
            debug!("rule table has no terminal catch-all, appending built-in");
            rules.push(catch_all_def().build()?);
        }

        Ok(Self { rules })
    }

    /// The built-in table: the default conversational pairs.
    ///
    /// # Errors
    /// Never fails in practice; the built-in definitions are valid.
    pub fn builtin() -> Result<Self, RuleError> {
        Self::from_defs(&builtin_defs())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// First rule matching the normalized input, with its captures.
    #[must_use]
    pub fn first_match<'s, 't>(&'s self, input: &'t str) -> Option<(&'s Rule, regex::Captures<'t>)> {
        self.rules
            .iter()
            .find_map(|rule| rule.captures(input).map(|caps| (rule, caps)))
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn catch_all_def() -> RuleDef {
    RuleDef::new(
        CATCH_ALL_PATTERN,
        &[
            "I'm not sure I understand. Could you rephrase that?",
            "I'm still learning. Can you ask me something else?",
            "That's interesting. Tell me more.",
        ],
    )
}

/// The default conversational rule table.
#[must_use]
pub fn builtin_defs() -> Vec<RuleDef> {
    vec![
        RuleDef::new(
            "hi|hello|hey|greetings",
            &[
                "Hello! How can I assist you today?",
                "Hi there! What can I do for you?",
                "Greetings! How may I help you?",
            ],
        ),
        RuleDef::new(
            "how are you|how's it going",
            &[
                "I'm just a chatbot, but I'm functioning well! How about you?",
                "I don't have feelings, but thanks for asking! How can I help you?",
            ],
        ),
        RuleDef::new(
            "what is your name|who are you",
            &[
                "I'm an NLP-powered chatbot. You can call me ChatBot.",
                "I'm your friendly neighborhood chatbot!",
            ],
        ),
        RuleDef::new(
            "bye|goodbye|see you later",
            &[
                "Goodbye! Have a great day!",
                "See you later! Come back if you have more questions.",
            ],
        ),
        RuleDef::new(
            "thank you|thanks",
            &["You're welcome!", "No problem! Happy to help.", "Anytime!"],
        ),
        RuleDef::new(
            "(.*) (weather|temperature) (.*)",
            &[
                "I'm sorry, I don't have real-time weather data. You might want to check a weather website or app.",
            ],
        ),
        RuleDef::new(
            "(.*) (age|old) (.*)",
            &["I'm a chatbot, so I don't have an age. I was just created recently!"],
        ),
        RuleDef::new(
            "(.*) (help|support|assistance) (.*)",
            &[
                "I can help with general questions. Try asking me about common topics or say 'help' to see options.",
            ],
        ),
        RuleDef::new(
            "(.*) (time|date) (.*)",
            &[
                "I don't have access to real-time clock data. Check your device's clock for the current time.",
            ],
        ),
        RuleDef::new(
            "what can you do|help",
            &[
                "I can answer general questions, have simple conversations, and provide information on predefined topics. Try asking me something!",
            ],
        ),
        catch_all_def(),
    ]
}
