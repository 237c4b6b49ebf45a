use rustc_hash::FxHashSet;

use crate::{LexicalRules, TokenCategory, TokenModifier};

/// The form of a rule set the scanner works with.
///
/// Reserved words are kept in a hash set for constant time lookup. The whitespace characters are
/// few, so a linear search over them is faster than hashing.
#[derive(Debug, Clone)]
pub(crate) struct CompiledRules {
    reserved_words: FxHashSet<String>,
    line_comment: String,
    whitespace: Box<[char]>,
}

impl CompiledRules {
    #[inline]
    pub(crate) fn is_whitespace(&self, c: char) -> bool {
        self.whitespace.contains(&c)
    }

    #[inline]
    pub(crate) fn line_comment(&self) -> &str {
        &self.line_comment
    }

    pub(crate) fn reserved_word_count(&self) -> usize {
        self.reserved_words.len()
    }

    /// Classifies a word.
    /// Reserved words are keywords, capitalized words are types and all other words are
    /// identifiers.
    pub(crate) fn classify_word(&self, word: &str) -> (TokenCategory, TokenModifier) {
        if self.reserved_words.contains(word) {
            (TokenCategory::Keyword, TokenModifier::Modification)
        } else if word.starts_with(|c: char| c.is_ascii_uppercase()) {
            (TokenCategory::Type, TokenModifier::Declaration)
        } else {
            (TokenCategory::Identifier, TokenModifier::Declaration)
        }
    }
}

impl From<&LexicalRules> for CompiledRules {
    fn from(rules: &LexicalRules) -> Self {
        Self {
            reserved_words: rules.reserved_words.iter().cloned().collect(),
            line_comment: rules.line_comment.clone(),
            whitespace: rules.whitespace.clone().into_boxed_slice(),
        }
    }
}
