use crate::ast::operator::Operator;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("filter is empty")]
    EmptyFilter,

    #[error("missing close square brace")]
    MissingCloseBracket,

    #[error("{count} unmatched close square brace(s)")]
    UnmatchedCloseBracket { count: usize },

    #[error("expected {expected} at position {position}, found '{found}'")]
    ExpectedToken {
        expected: &'static str,
        found: String,
        position: usize,
    },

    #[error("expected {expected} at end of filter")]
    UnexpectedEnd { expected: &'static str },

    #[error("unexpected token '{found}' at position {position}")]
    UnexpectedToken { found: String, position: usize },

    #[error("empty square braces at position {position}")]
    EmptyScope { position: usize },

    #[error("expected an expression after ',' at position {position}")]
    ExpectedClause { position: usize },

    #[error("unknown filter key '{key}'")]
    UnknownColumn { key: String },

    #[error("operator '{operator}' at position {position} only accepts key/value operands")]
    InvalidOperand { operator: Operator, position: usize },

    #[error("filter nesting exceeds the maximum depth of {max}")]
    TooDeep { max: usize },
}
