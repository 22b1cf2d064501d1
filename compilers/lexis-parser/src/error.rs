use lexis_protocol::TagError;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read lexicon source: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed encoding at line {line}: {reason}")]
    Malformed { line: usize, reason: Malformation },
}

/// What was wrong with a line of the encoded lexicon.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Malformation {
    #[error("{what} needs {expected} fields, found {found}")]
    FieldCount {
        what: &'static str,
        expected: &'static str,
        found: usize,
    },

    #[error("definition count `{0}` is not a number")]
    DefinitionCount(String),

    #[error(transparent)]
    Tag(#[from] TagError),

    #[error("input ended while reading {0}")]
    UnexpectedEof(&'static str),
}

impl ParseError {
    pub fn malformed(line: usize, reason: impl Into<Malformation>) -> Self {
        ParseError::Malformed {
            line,
            reason: reason.into(),
        }
    }

    /// Source line of a malformed entry, if the error has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Malformed { line, .. } => Some(*line),
            ParseError::Io(_) => None,
        }
    }
}
