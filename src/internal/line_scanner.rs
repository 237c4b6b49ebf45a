use log::trace;

use super::{digits_len, identifier_len, CompiledRules};
use crate::{Token, TokenCategory, TokenModifier};

/// An iterator over the tokens of a single line.
///
/// The scanner walks the line from left to right. At each offset the first rule that applies
/// decides what happens:
/// 1. Whitespace is skipped.
/// 2. The line comment marker starts a comment that extends to the end of the line.
/// 3. A word is classified as keyword, type or identifier.
/// 4. A run of digits is a number.
/// 5. Any other character is skipped.
///
/// The scanner never looks beyond the line and never backtracks.
pub(crate) struct LineScanner<'r, 'h> {
    rules: &'r CompiledRules,
    // The index of the line in the text.
    line_index: usize,
    line: &'h str,
    // The byte offset of the scan position.
    offset: usize,
    // The character offset of the scan position.
    column: usize,
}

impl<'r, 'h> LineScanner<'r, 'h> {
    pub(crate) fn new(rules: &'r CompiledRules, line_index: usize, line: &'h str) -> Self {
        trace!("Scanning line {}: {:?}", line_index, line);
        Self {
            rules,
            line_index,
            line,
            offset: 0,
            column: 0,
        }
    }

    #[inline]
    pub(crate) fn line_index(&self) -> usize {
        self.line_index
    }

    /// Returns the next token of the line.
    pub(crate) fn next_token(&mut self) -> Option<Token> {
        let line = self.line;
        while let Some(c) = line[self.offset..].chars().next() {
            let rest = &line[self.offset..];

            if self.rules.is_whitespace(c) {
                self.advance(c.len_utf8(), 1);
                continue;
            }

            if rest.starts_with(self.rules.line_comment()) {
                let length = rest.chars().count();
                let token = Token::with_modifier(
                    self.line_index,
                    self.column,
                    length,
                    TokenCategory::Comment,
                    TokenModifier::Documentation,
                );
                self.advance(rest.len(), length);
                return Some(token);
            }

            let len = identifier_len(rest);
            if len > 0 {
                let (category, modifier) = self.rules.classify_word(&rest[..len]);
                return Some(self.emit(len, category, modifier));
            }

            let len = digits_len(rest);
            if len > 0 {
                return Some(self.emit(len, TokenCategory::Number, TokenModifier::Static));
            }

            self.advance(c.len_utf8(), 1);
        }
        None
    }

    // Emits a token of ASCII characters at the scan position and moves past it.
    fn emit(&mut self, len: usize, category: TokenCategory, modifier: TokenModifier) -> Token {
        let token = Token::with_modifier(self.line_index, self.column, len, category, modifier);
        self.advance(len, len);
        token
    }

    #[inline]
    fn advance(&mut self, bytes: usize, chars: usize) {
        self.offset += bytes;
        self.column += chars;
    }
}

impl std::fmt::Debug for LineScanner<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineScanner")
            .field("line_index", &self.line_index)
            .field("column", &self.column)
            .finish()
    }
}

impl Iterator for LineScanner<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
