use std::sync::LazyLock;

use crate::{internal::CompiledRules, LexicalRules, Token, Tokens};

/// A tokenizer that classifies the tokens of a text for semantic highlighting.
///
/// The tokenizer scans each line on its own, from left to right, and recognizes whitespace, line
/// comments, words and numbers. Words are classified as keywords if they are reserved, as types if
/// they start with an uppercase letter and as identifiers otherwise. Everything else is skipped.
///
/// Scanning never fails and keeps no state between calls, so a tokenizer can be shared between
/// threads and used for any number of texts.
///
/// To create a tokenizer with other than the default rules, use the
/// [`crate::TokenizerBuilder`].
#[derive(Debug, Clone)]
pub struct Tokenizer {
    rules: LexicalRules,
    compiled: CompiledRules,
}

impl Tokenizer {
    /// Creates a tokenizer from already validated rules.
    pub(crate) fn new(rules: LexicalRules) -> Self {
        let compiled = CompiledRules::from(&rules);
        Self { rules, compiled }
    }

    /// Returns all tokens of the text, ordered by line and column.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        self.tokens(text).collect()
    }

    /// Returns an iterator over the tokens of the text.
    /// The iterator yields the same tokens as [`Tokenizer::tokenize`] returns.
    pub fn tokens<'h>(&self, text: &'h str) -> Tokens<'_, 'h> {
        Tokens::new(&self.compiled, text)
    }

    /// Returns the rules the tokenizer was built from.
    #[inline]
    pub fn rules(&self) -> &LexicalRules {
        &self.rules
    }

    /// Returns the number of distinct reserved words.
    pub(crate) fn reserved_word_count(&self) -> usize {
        self.compiled.reserved_word_count()
    }
}

impl Default for Tokenizer {
    /// Creates a tokenizer with the default rules.
    fn default() -> Self {
        Self::new(LexicalRules::default())
    }
}

/// The tokenizer used by [`tokenize`].
static DEFAULT_TOKENIZER: LazyLock<Tokenizer> = LazyLock::new(Tokenizer::default);

/// Returns all tokens of the text, classified with the default rules.
///
/// This is a shortcut for `Tokenizer::default().tokenize(text)` that builds the default tokenizer
/// only once.
pub fn tokenize(text: &str) -> Vec<Token> {
    DEFAULT_TOKENIZER.tokenize(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TokenCategory, TokenModifier};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn assert_single(text: &str, category: TokenCategory, length: usize, modifier: TokenModifier) {
        let tokens = tokenize(text);
        assert_eq!(tokens.len(), 1, "{:?}", tokens);
        let token = tokens[0];
        assert_eq!(token.line(), 0);
        assert_eq!(token.start_column(), 0);
        assert_eq!(token.length(), length);
        assert_eq!(token.category(), category);
        assert_eq!(token.modifiers().iter().collect::<Vec<_>>(), vec![modifier]);
    }

    #[test]
    fn test_empty_text() {
        init();
        assert!(tokenize("").is_empty());
        assert!(tokenize("\n\r\n\r").is_empty());
        assert!(tokenize("  \t ").is_empty());
    }

    #[test]
    fn test_single_tokens() {
        init();
        assert_single(
            "-- comment text",
            TokenCategory::Comment,
            15,
            TokenModifier::Documentation,
        );
        assert_single("where", TokenCategory::Keyword, 5, TokenModifier::Modification);
        assert_single("Maybe", TokenCategory::Type, 5, TokenModifier::Declaration);
        assert_single("foo", TokenCategory::Identifier, 3, TokenModifier::Declaration);
        assert_single("2024", TokenCategory::Number, 4, TokenModifier::Static);
    }

    #[test]
    fn test_every_reserved_word_is_a_keyword() {
        init();
        for word in crate::DEFAULT_RESERVED_WORDS {
            assert_single(word, TokenCategory::Keyword, word.len(), TokenModifier::Modification);
        }
    }

    #[test]
    fn test_two_identifiers() {
        init();
        let tokens = tokenize("foo bar42");
        assert_eq!(tokens.len(), 2);
        assert_eq!((tokens[0].start_column(), tokens[0].length()), (0, 3));
        assert_eq!((tokens[1].start_column(), tokens[1].length()), (4, 5));
        assert!(tokens
            .iter()
            .all(|t| t.category() == TokenCategory::Identifier));
    }

    #[test]
    fn test_mixed_line_endings() {
        init();
        let tokens = tokenize("a\nb\r\nc\rd\n\ne");
        let lines: Vec<usize> = tokens.iter().map(Token::line).collect();
        assert_eq!(lines, vec![0, 1, 2, 3, 5]);
        assert!(tokens.iter().all(|t| t.start_column() == 0));
    }

    #[test]
    fn test_idempotence() {
        init();
        let text = "instance Show T where\n  show _ = \"T\" -- ok";
        assert_eq!(tokenize(text), tokenize(text));
    }

    #[test]
    fn test_shared_between_threads() {
        init();
        let tokenizer = Tokenizer::default();
        let expected = tokenizer.tokenize("let x = 1 in x");
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| tokenizer.tokenize("let x = 1 in x")))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
