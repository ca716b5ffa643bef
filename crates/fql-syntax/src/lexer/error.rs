use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unterminated string literal")]
    UnterminatedString { position: usize },

    #[error("unknown operator keyword '${keyword}' at position {position}")]
    UnknownKeyword { keyword: String, position: usize },

    #[error("integer literal '{literal}' at position {position} is out of range")]
    IntegerOutOfRange { literal: String, position: usize },
}

impl LexError {
    /// Byte offset in the filter text where the offending token starts.
    pub fn position(&self) -> usize {
        match self {
            LexError::UnterminatedString { position }
            | LexError::UnknownKeyword { position, .. }
            | LexError::IntegerOutOfRange { position, .. } => *position,
        }
    }
}
