use serde::{Deserialize, Serialize};
use std::fmt;

/// Operator keywords of the filter language (`$and`, `$eq`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    And,
    Or,
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    Like,
}

impl Operator {
    pub const ALL: [Operator; 9] = [
        Operator::And,
        Operator::Or,
        Operator::Eq,
        Operator::Neq,
        Operator::Gt,
        Operator::Gte,
        Operator::Lt,
        Operator::Lte,
        Operator::Like,
    ];

    /// Looks up a keyword without its `$` prefix. Matching is exact and case sensitive.
    pub fn from_keyword(word: &str) -> Option<Operator> {
        match word {
            "and" => Some(Operator::And),
            "or" => Some(Operator::Or),
            "eq" => Some(Operator::Eq),
            "neq" => Some(Operator::Neq),
            "gt" => Some(Operator::Gt),
            "gte" => Some(Operator::Gte),
            "lt" => Some(Operator::Lt),
            "lte" => Some(Operator::Lte),
            "like" => Some(Operator::Like),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Eq => "eq",
            Operator::Neq => "neq",
            Operator::Gt => "gt",
            Operator::Gte => "gte",
            Operator::Lt => "lt",
            Operator::Lte => "lte",
            Operator::Like => "like",
        }
    }

    /// `$and` and `$or` combine sub-expressions.
    pub fn is_logical(&self) -> bool {
        matches!(self, Operator::And | Operator::Or)
    }

    /// Comparison operators apply to key/value operands only.
    pub fn is_comparison(&self) -> bool {
        !self.is_logical()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.keyword())
    }
}
