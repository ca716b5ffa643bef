use crate::{lexer::error::LexError, parser::error::ParseError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("Lexing error: {0}")]
    Lex(#[from] LexError),

    #[error("Parsing error: {0}")]
    Parse(#[from] ParseError),
}
