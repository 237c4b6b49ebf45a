//! Module with the rule set a tokenizer is built from.
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::Result;

/// The reserved words of the default rule set.
pub const DEFAULT_RESERVED_WORDS: &[&str] = &[
    "case", "class", "data", "default", "deriving", "do", "else", "if", "import", "in", "infix",
    "infixl", "infixr", "instance", "let", "module", "newtype", "of", "then", "type", "where",
];

/// The line comment marker of the default rule set.
pub const DEFAULT_LINE_COMMENT: &str = "--";

/// The whitespace characters of the default rule set: space, tab and form feed.
pub const DEFAULT_WHITESPACE: &[char] = &[' ', '\t', '\u{0C}'];

/// A set of lexical rules.
///
/// The rules determine which words are reserved, which character sequence starts a line comment
/// and which characters are skipped as whitespace. Everything else about the scanning is fixed:
/// words are an ASCII letter followed by ASCII letters or digits, numbers are runs of ASCII digits.
///
/// A rule set is plain data and can be read from JSON. Missing fields take the values of the
/// default rule set.
/// ```json
/// {
///   "name": "tiny",
///   "reserved_words": ["let", "in"],
///   "line_comment": "#"
/// }
/// ```
/// Rules are validated when a [crate::Tokenizer] is built from them with the
/// [crate::TokenizerBuilder].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalRules {
    /// The name of the rule set. It is only used for diagnostics.
    pub name: String,
    /// Words that are classified as keywords. The comparison is case-sensitive and exact.
    pub reserved_words: Vec<String>,
    /// The character sequence that starts a comment extending to the end of the line.
    pub line_comment: String,
    /// Characters that are skipped without producing a token.
    pub whitespace: Vec<char>,
}

impl LexicalRules {
    /// Creates a new rule set with the given name, reserved words and line comment marker.
    /// The whitespace characters are the default ones.
    pub fn new(name: &str, reserved_words: &[&str], line_comment: &str) -> Self {
        Self {
            name: name.to_string(),
            reserved_words: reserved_words.iter().map(|w| w.to_string()).collect(),
            line_comment: line_comment.to_string(),
            whitespace: DEFAULT_WHITESPACE.to_vec(),
        }
    }

    /// Reads a rule set from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a rule set from a reader that provides JSON.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Serializes the rule set to pretty printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for LexicalRules {
    fn default() -> Self {
        Self::new("haskell", DEFAULT_RESERVED_WORDS, DEFAULT_LINE_COMMENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SemtokErrorKind;

    #[test]
    fn test_default_rules() {
        let rules = LexicalRules::default();
        assert_eq!(rules.name, "haskell");
        assert_eq!(rules.reserved_words.len(), 21);
        assert!(rules.reserved_words.iter().any(|w| w == "where"));
        assert_eq!(rules.line_comment, "--");
        assert_eq!(rules.whitespace, vec![' ', '\t', '\u{0C}']);
    }

    #[test]
    fn test_missing_fields_take_default_values() {
        let rules =
            LexicalRules::from_json_str(r##"{"name":"tiny","reserved_words":["let","in"]}"##)
                .unwrap();
        assert_eq!(rules.name, "tiny");
        assert_eq!(rules.reserved_words, vec!["let", "in"]);
        assert_eq!(rules.line_comment, DEFAULT_LINE_COMMENT);
        assert_eq!(rules.whitespace, DEFAULT_WHITESPACE);
    }

    #[test]
    fn test_rules_serialization() {
        let rules = LexicalRules::new("tiny", &["let"], "#");
        let serialized = rules.to_json().unwrap();
        let deserialized = LexicalRules::from_json_reader(serialized.as_bytes()).unwrap();
        assert_eq!(rules, deserialized);
    }

    #[test]
    fn test_malformed_json() {
        let err = LexicalRules::from_json_str(r#"{"reserved_words": 42}"#).unwrap_err();
        assert!(matches!(err.kind(), SemtokErrorKind::JsonError(_)));
    }
}
