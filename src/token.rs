use std::{fmt, ops::Range};

use serde::{Deserialize, Serialize};

use crate::{
    Position, Result, SemtokError, SemtokErrorKind, TokenCategory, TokenModifier, TokenModifiers,
};

/// A classified span of characters within a single line.
///
/// Columns count characters, not bytes. A token never spans a line break and is never empty.
/// Deserializing an empty token fails.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TokenData")]
pub struct Token {
    /// The zero-based line index.
    line: usize,
    /// The zero-based column where the token starts.
    start_column: usize,
    /// The number of characters of the token.
    length: usize,
    /// The semantic category of the token.
    category: TokenCategory,
    /// The modifiers that qualify the category.
    modifiers: TokenModifiers,
}

impl Token {
    /// Create a new token.
    pub fn new(
        line: usize,
        start_column: usize,
        length: usize,
        category: TokenCategory,
        modifiers: TokenModifiers,
    ) -> Self {
        debug_assert!(length > 0, "tokens must not be empty");
        Self {
            line,
            start_column,
            length,
            category,
            modifiers,
        }
    }

    /// Create a new token, failing if the length is zero.
    pub fn try_new(
        line: usize,
        start_column: usize,
        length: usize,
        category: TokenCategory,
        modifiers: TokenModifiers,
    ) -> Result<Self> {
        if length == 0 {
            return Err(SemtokError::new(SemtokErrorKind::EmptyToken(
                line,
                start_column,
            )));
        }
        Ok(Self::new(line, start_column, length, category, modifiers))
    }

    /// Create a new token with a single modifier.
    pub(crate) fn with_modifier(
        line: usize,
        start_column: usize,
        length: usize,
        category: TokenCategory,
        modifier: TokenModifier,
    ) -> Self {
        Self::new(line, start_column, length, category, modifier.into())
    }

    /// Get the line index of the token.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Get the column where the token starts.
    #[inline]
    pub fn start_column(&self) -> usize {
        self.start_column
    }

    /// Get the column after the last character of the token.
    #[inline]
    pub fn end_column(&self) -> usize {
        self.start_column + self.length
    }

    /// Get the number of characters of the token.
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Get the columns of the token as range.
    #[inline]
    pub fn columns(&self) -> Range<usize> {
        self.start_column..self.end_column()
    }

    /// Get the start position of the token.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.start_column)
    }

    /// Get the category of the token.
    #[inline]
    pub fn category(&self) -> TokenCategory {
        self.category
    }

    /// Get the modifiers of the token.
    #[inline]
    pub fn modifiers(&self) -> TokenModifiers {
        self.modifiers
    }

    /// Returns the text of the token.
    ///
    /// The given line must be the line the token was scanned from. `None` is returned if the line
    /// is too short to contain the token.
    pub fn text<'l>(&self, line: &'l str) -> Option<&'l str> {
        let mut boundaries = line
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(line.len()))
            .skip(self.start_column);
        let start = boundaries.next()?;
        let end = boundaries.nth(self.length.checked_sub(1)?)?;
        line.get(start..end)
    }

    /// Returns the columns of the token counted in UTF-16 code units.
    ///
    /// Hosts that address text in UTF-16, like editors following the language server protocol,
    /// need these instead of [Token::columns]. The given line must be the line the token was
    /// scanned from. `None` is returned if the line is too short to contain the token.
    pub fn utf16_columns(&self, line: &str) -> Option<Range<usize>> {
        if line.chars().count() < self.end_column() {
            return None;
        }
        let mut chars = line.chars();
        let start: usize = chars
            .by_ref()
            .take(self.start_column)
            .map(char::len_utf16)
            .sum();
        let len: usize = chars.take(self.length).map(char::len_utf16).sum();
        Some(start..start + len)
    }
}

// The unchecked form of a token as it is read from serialized data.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenData {
    line: usize,
    start_column: usize,
    length: usize,
    category: TokenCategory,
    modifiers: TokenModifiers,
}

impl TryFrom<TokenData> for Token {
    type Error = SemtokError;

    fn try_from(data: TokenData) -> Result<Self> {
        Token::try_new(
            data.line,
            data.start_column,
            data.length,
            data.category,
            data.modifiers,
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}..{} {} {}",
            self.line,
            self.start_column,
            self.end_column(),
            self.category,
            self.modifiers
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identifier(line: usize, start_column: usize, length: usize) -> Token {
        Token::with_modifier(
            line,
            start_column,
            length,
            TokenCategory::Identifier,
            TokenModifier::Declaration,
        )
    }

    #[test]
    fn test_token_accessors() {
        let token = identifier(2, 4, 6);
        assert_eq!(token.line(), 2);
        assert_eq!(token.start_column(), 4);
        assert_eq!(token.length(), 6);
        assert_eq!(token.end_column(), 10);
        assert_eq!(token.columns(), 4..10);
        assert_eq!(token.position(), Position::new(2, 4));
        assert!(token.modifiers().contains(TokenModifier::Declaration));
        assert_eq!(token.to_string(), "2:4..10 identifier [declaration]");
    }

    #[test]
    fn test_token_text() {
        let token = identifier(0, 4, 5);
        assert_eq!(token.text("foo bar42"), Some("bar42"));
        assert_eq!(token.text("foo bar"), None);

        // Columns count characters, so the token after a multi-byte character starts at column 2.
        let token = identifier(0, 2, 1);
        assert_eq!(token.text("λ x"), Some("x"));
    }

    #[test]
    fn test_token_serialization() {
        let token = Token::with_modifier(
            0,
            0,
            5,
            TokenCategory::Keyword,
            TokenModifier::Modification,
        );
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(
            json,
            r#"{"line":0,"startColumn":0,"length":5,"category":"keyword","modifiers":["modification"]}"#
        );
        let parsed: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, token);
    }

    #[test]
    fn test_empty_token_is_rejected() {
        let json = r#"{"line":0,"startColumn":0,"length":0,"category":"keyword","modifiers":[]}"#;
        let err = serde_json::from_str::<Token>(json).unwrap_err();
        assert!(err.to_string().contains("Empty token at line 0, column 0"));

        let err = Token::try_new(3, 7, 0, TokenCategory::Number, TokenModifiers::new())
            .unwrap_err();
        assert!(matches!(err.kind(), SemtokErrorKind::EmptyToken(3, 7)));

        // Tokens built without the check don't make text extraction panic.
        let token = Token {
            line: 0,
            start_column: 1,
            length: 0,
            category: TokenCategory::Keyword,
            modifiers: TokenModifiers::new(),
        };
        assert_eq!(token.text("abc"), None);
    }

    #[test]
    fn test_utf16_columns() {
        // The crab is one character but two UTF-16 code units.
        let line = "🦀 crab42";
        let token = identifier(0, 2, 6);
        assert_eq!(token.text(line), Some("crab42"));
        assert_eq!(token.columns(), 2..8);
        assert_eq!(token.utf16_columns(line), Some(3..9));

        let token = identifier(0, 0, 1);
        assert_eq!(token.utf16_columns(line), Some(0..2));
        assert_eq!(token.utf16_columns(""), None);

        // Without characters outside the basic plane both units agree.
        let token = identifier(0, 4, 5);
        assert_eq!(token.utf16_columns("foo bar42"), Some(4..9));
    }
}
