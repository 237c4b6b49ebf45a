use log::trace;

use crate::{
    internal::{CompiledRules, LineScanner, Lines},
    Token,
};

/// An iterator over the tokens of a text.
///
/// The iterator yields [`Token`] values ordered by line and column until the end of the text is
/// reached. Lines are scanned on demand, so dropping the iterator early leaves the rest of the text
/// unscanned.
///
/// * `'t` represents the lifetime of the tokenizer the iterator was created by.
/// * `'h` represents the lifetime of the text being scanned.
///
/// This iterator can be created with the [`crate::Tokenizer::tokens`] method.
#[derive(Debug)]
pub struct Tokens<'t, 'h> {
    rules: &'t CompiledRules,
    lines: std::iter::Enumerate<Lines<'h>>,
    current: Option<LineScanner<'t, 'h>>,
}

impl<'t, 'h> Tokens<'t, 'h> {
    pub(crate) fn new(rules: &'t CompiledRules, text: &'h str) -> Self {
        Self {
            rules,
            lines: Lines::new(text).enumerate(),
            current: None,
        }
    }

    /// Returns the index of the line the iterator currently scans.
    /// Before the first call of `next` no line is scanned and `None` is returned.
    pub fn current_line(&self) -> Option<usize> {
        self.current.as_ref().map(LineScanner::line_index)
    }
}

impl Iterator for Tokens<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.current.as_mut().and_then(LineScanner::next_token) {
                trace!("Token: {}", token);
                return Some(token);
            }
            let (index, line) = self.lines.next()?;
            self.current = Some(LineScanner::new(self.rules, index, line));
        }
    }
}

impl std::iter::FusedIterator for Tokens<'_, '_> {}
