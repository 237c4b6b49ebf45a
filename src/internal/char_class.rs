//! The character classes of the scanner.
//!
//! Words and numbers are restricted to ASCII, so the length of a match in bytes equals its length
//! in characters.

/// Check if the character ends a line. Both `\r` and `\n` do, `\r\n` is a single line break.
#[inline]
pub(crate) fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Returns the length of the word at the start of the haystack or 0 if there is none.
/// A word is an ASCII letter followed by zero or more ASCII letters or digits.
pub(crate) fn identifier_len(haystack: &str) -> usize {
    let bytes = haystack.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() => {
            1 + bytes[1..]
                .iter()
                .take_while(|b| b.is_ascii_alphanumeric())
                .count()
        }
        _ => 0,
    }
}

/// Returns the length of the run of ASCII digits at the start of the haystack.
pub(crate) fn digits_len(haystack: &str) -> usize {
    haystack
        .as_bytes()
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count()
}

/// Check if the whole text is a single word.
pub(crate) fn is_identifier(text: &str) -> bool {
    !text.is_empty() && identifier_len(text) == text.len()
}
