use crate::ast::{operator::Operator, span::Span};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Token {
            kind,
            span: Span::new(start, end),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    Integer(i64),
    String(String),

    // Keys
    Identifier(String),

    // Delimiters
    OpenBracket,  // [
    CloseBracket, // ]
    Colon,        // :
    Comma,        // ,

    // Operator keywords ($and, $eq, ...)
    Operator(Operator),
}

impl TokenKind {
    pub fn is_value(&self) -> bool {
        matches!(self, TokenKind::Integer(_) | TokenKind::String(_))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Integer(n) => write!(f, "{}", n),
            TokenKind::String(s) => write!(f, "'{}'", s),
            TokenKind::Identifier(s) => write!(f, "{}", s),
            TokenKind::OpenBracket => write!(f, "["),
            TokenKind::CloseBracket => write!(f, "]"),
            TokenKind::Colon => write!(f, ":"),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Operator(op) => write!(f, "{}", op),
        }
    }
}
