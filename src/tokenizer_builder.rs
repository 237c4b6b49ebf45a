use log::debug;

use crate::{
    internal::{is_identifier, is_line_break},
    LexicalRules, Result, SemtokError, SemtokErrorKind, Tokenizer,
};

/// A builder for creating a tokenizer.
///
/// The builder starts with the default rule set. Use [TokenizerBuilder::with_rules] to replace it
/// or the other methods to adjust single rules.
#[derive(Debug, Clone, Default)]
pub struct TokenizerBuilder {
    rules: LexicalRules,
}

impl TokenizerBuilder {
    /// Creates a new tokenizer builder with the default rule set.
    pub fn new() -> Self {
        Self {
            rules: LexicalRules::default(),
        }
    }

    /// Replaces the rule set of the builder.
    pub fn with_rules(mut self, rules: LexicalRules) -> Self {
        self.rules = rules;
        self
    }

    /// Sets the name of the rule set.
    pub fn name(mut self, name: &str) -> Self {
        self.rules.name = name.to_string();
        self
    }

    /// Adds a reserved word.
    pub fn add_reserved_word(mut self, word: &str) -> Self {
        self.rules.reserved_words.push(word.to_string());
        self
    }

    /// Adds multiple reserved words.
    pub fn add_reserved_words(mut self, words: &[&str]) -> Self {
        self.rules
            .reserved_words
            .extend(words.iter().map(|w| w.to_string()));
        self
    }

    /// Removes all reserved words, including the default ones.
    pub fn clear_reserved_words(mut self) -> Self {
        self.rules.reserved_words.clear();
        self
    }

    /// Sets the line comment marker.
    pub fn line_comment(mut self, marker: &str) -> Self {
        self.rules.line_comment = marker.to_string();
        self
    }

    /// Sets the whitespace characters.
    pub fn whitespace(mut self, whitespace: &[char]) -> Self {
        self.rules.whitespace = whitespace.to_vec();
        self
    }

    /// Validates the rule set and builds the tokenizer from it.
    pub fn build(self) -> Result<Tokenizer> {
        validate(&self.rules)?;
        let tokenizer = Tokenizer::new(self.rules);
        debug!(
            "Built tokenizer for rule set '{}' with {} reserved words",
            tokenizer.rules().name,
            tokenizer.reserved_word_count()
        );
        Ok(tokenizer)
    }
}

fn validate(rules: &LexicalRules) -> Result<()> {
    if let Some(word) = rules.reserved_words.iter().find(|w| !is_identifier(w)) {
        return Err(SemtokError::new(SemtokErrorKind::InvalidReservedWord(
            word.clone(),
        )));
    }
    if rules.line_comment.is_empty() || rules.line_comment.chars().any(is_line_break) {
        return Err(SemtokError::new(SemtokErrorKind::InvalidCommentMarker(
            rules.line_comment.clone(),
        )));
    }
    if let Some(c) = rules
        .whitespace
        .iter()
        .copied()
        .find(|c| c.is_ascii_alphanumeric() || is_line_break(*c))
    {
        return Err(SemtokError::new(SemtokErrorKind::InvalidWhitespace(c)));
    }
    // Whitespace is skipped before the marker is tested, so the marker must not start with it.
    if rules
        .line_comment
        .chars()
        .next()
        .is_some_and(|c| rules.whitespace.contains(&c))
    {
        return Err(SemtokError::new(SemtokErrorKind::InvalidCommentMarker(
            rules.line_comment.clone(),
        )));
    }
    Ok(())
}
