use super::is_line_break;

/// An iterator over the lines of a text.
///
/// `\r\n`, `\r` and `\n` are all accepted as line breaks, also mixed in one text. The line breaks
/// themselves are not part of the yielded lines. Like a split on the line breaks, a text with `n`
/// line breaks always yields `n + 1` lines, so the empty text yields one empty line and a trailing
/// line break yields a final empty line.
#[derive(Debug, Clone)]
pub(crate) struct Lines<'h> {
    // The unprocessed rest of the text. None after the last line was yielded.
    rest: Option<&'h str>,
}

impl<'h> Lines<'h> {
    pub(crate) fn new(text: &'h str) -> Self {
        Self { rest: Some(text) }
    }
}

impl<'h> Iterator for Lines<'h> {
    type Item = &'h str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        match rest.find(is_line_break) {
            Some(end) => {
                let break_len = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = Some(&rest[end + break_len..]);
                Some(&rest[..end])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}
