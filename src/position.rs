//! Module with the position type.
//! A position is a struct that contains a line index and a column offset.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A position in the scanned text.
///
/// Both the line and the column are zero-based. The column counts characters from the start of
/// the line, it is not a byte offset. Positions order by line first and column second, which is
/// the order in which tokens are produced.
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
pub struct Position {
    /// The line index of the position.
    pub line: usize,
    /// The column offset of the position.
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Get the line index of the position.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Get the column offset of the position.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }
}

impl From<(usize, usize)> for Position {
    fn from((line, column): (usize, usize)) -> Self {
        Self::new(line, column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line: {}, column: {}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position() {
        let pos = Position::new(0, 4);
        assert_eq!(pos.line(), 0);
        assert_eq!(pos.column(), 4);
        assert_eq!(format!("{}", pos), "line: 0, column: 4");
        assert_eq!(pos, (0, 4).into());
    }

    #[test]
    fn test_position_order() {
        assert!(Position::new(0, 10) < Position::new(1, 0));
        assert!(Position::new(1, 2) < Position::new(1, 3));
    }
}
