use thiserror::Error;

/// The result type for the `semtok` crate.
pub type Result<T> = std::result::Result<T, SemtokError>;

/// The error type for the `semtok` crate.
///
/// Scanning itself never fails. Errors only arise while a [crate::Tokenizer] is built from a rule
/// set, while rules are loaded from JSON, or when a legend label is parsed.
#[derive(Error, Debug)]
pub struct SemtokError {
    /// The source of the error.
    pub source: Box<SemtokErrorKind>,
}

impl SemtokError {
    /// Create a new `SemtokError`.
    pub fn new(kind: SemtokErrorKind) -> Self {
        SemtokError {
            source: Box::new(kind),
        }
    }

    /// Get the kind of the error.
    #[inline]
    pub fn kind(&self) -> &SemtokErrorKind {
        &self.source
    }
}

impl std::fmt::Display for SemtokError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// The error kind type.
#[derive(Error, Debug)]
pub enum SemtokErrorKind {
    /// A reserved word that can never be scanned as a word, i.e. it doesn't consist of an ASCII
    /// letter followed by ASCII letters or digits.
    #[error("Invalid reserved word '{0}': expected an ASCII letter followed by ASCII letters or digits")]
    InvalidReservedWord(String),

    /// The line comment marker is empty or contains a line break.
    #[error("Invalid line comment marker '{}'", .0.escape_default())]
    InvalidCommentMarker(String),

    /// A whitespace character that would shadow words, numbers or line breaks.
    #[error("Invalid whitespace character '{}'", .0.escape_default())]
    InvalidWhitespace(char),

    /// A token without characters, e.g. read from serialized data.
    #[error("Empty token at line {0}, column {1}")]
    EmptyToken(usize, usize),

    /// A label that is not part of the category legend.
    #[error("Unknown token category '{0}'")]
    UnknownCategory(String),

    /// A label that is not part of the modifier legend.
    #[error("Unknown token modifier '{0}'")]
    UnknownModifier(String),

    /// A std::io error occurred.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// A rule set could not be (de)serialized.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}

impl From<std::io::Error> for SemtokError {
    fn from(error: std::io::Error) -> Self {
        SemtokError::new(SemtokErrorKind::IoError(error))
    }
}

impl From<serde_json::Error> for SemtokError {
    fn from(error: serde_json::Error) -> Self {
        SemtokError::new(SemtokErrorKind::JsonError(error))
    }
}
