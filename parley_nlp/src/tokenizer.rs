//! Word tokenizer.
//!
//! Splits on whitespace, then peels punctuation off word edges into
//! separate tokens. Apostrophes and hyphens inside a word are kept so
//! contractions ("don't") and compounds ("real-time") survive as one
//! token. Runs of punctuation ("...") become a single token.

/// Whether a character belongs inside a word token.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\'' || c == '-'
}

/// Whether a token consists purely of punctuation.
#[must_use]
pub fn is_punctuation(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(char::is_alphanumeric)
}

/// Split text into word and punctuation tokens, preserving case.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();

    for chunk in text.split_whitespace() {
        let mut current = String::new();
        let mut current_is_word = false;

        for c in chunk.chars() {
            let word_char = is_word_char(c);
            if !current.is_empty() && word_char != current_is_word {
                tokens.push(std::mem::take(&mut current));
            }
            current.push(c);
            current_is_word = word_char;
        }
        if !current.is_empty() {
            tokens.push(current);
        }
    }

    // Leading or trailing apostrophes and hyphens are punctuation, not
    // word glue ("'hello'" must not keep its quotes).
    tokens
        .into_iter()
        .flat_map(split_edge_marks)
        .filter(|t| !t.is_empty())
        .collect()
}

fn split_edge_marks(token: String) -> Vec<String> {
    if is_punctuation(&token) {
        return vec![token];
    }

    let stripped = token.trim_matches(|c| c == '\'' || c == '-');
    if stripped.len() == token.len() {
        return vec![token];
    }

    let start = token.len() - token.trim_start_matches(|c| c == '\'' || c == '-').len();
    let end = start + stripped.len();

    let mut parts = Vec::new();
    if start > 0 {
        parts.push(token[..start].to_string());
    }
    parts.push(token[start..end].to_string());
    if end < token.len() {
        parts.push(token[end..].to_string());
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_words_and_punctuation() {
        assert_eq!(
            tokenize("Hello, world!"),
            vec!["Hello", ",", "world", "!"]
        );
    }

    #[test]
    fn keeps_contractions_together() {
        assert_eq!(tokenize("how's it going?"), vec!["how's", "it", "going", "?"]);
        assert_eq!(tokenize("don't"), vec!["don't"]);
    }

    #[test]
    fn keeps_hyphenated_compounds() {
        assert_eq!(tokenize("real-time data"), vec!["real-time", "data"]);
    }

    #[test]
    fn groups_punctuation_runs() {
        assert_eq!(tokenize("wait... what?!"), vec!["wait", "...", "what", "?!"]);
    }

    #[test]
    fn strips_quoting_apostrophes() {
        assert_eq!(tokenize("'hello'"), vec!["'", "hello", "'"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn punctuation_detection() {
        assert!(is_punctuation(","));
        assert!(is_punctuation("?!"));
        assert!(!is_punctuation("don't"));
        assert!(!is_punctuation("a"));
    }
}
