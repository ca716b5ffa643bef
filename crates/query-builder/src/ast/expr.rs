//! Defines the AST for SQL expressions.

use crate::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A column or table identifier, e.g., `users` or `users.id`.
    Identifier(Ident),

    /// A literal value, rendered as a positional parameter.
    Value(Value),

    /// A named parameter, e.g., `:status`, bound through `set_parameter`.
    Placeholder(String),

    /// A binary comparison, e.g., `column = :value` or `name LIKE :name`.
    BinaryOp(Box<BinaryOp>),

    /// An n-ary conjunction or disjunction.
    Logical {
        op: LogicalOperator,
        operands: Vec<Expr>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub qualifier: Option<String>, // e.g., the 'u' in 'u.id'
    pub name: String,              // e.g., the 'id' in 'u.id'
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub left: Expr,
    pub op: BinaryOperator,
    pub right: Expr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Eq,    // =
    NotEq, // <>
    Lt,    // <
    LtEq,  // <=
    Gt,    // >
    GtEq,  // >=
    Like,  // LIKE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    And,
    Or,
}

impl Expr {
    /// Conjunction of `operands`. Nested conjunctions are flattened and a
    /// single operand is returned as is.
    pub fn and(operands: impl IntoIterator<Item = Expr>) -> Expr {
        Self::logical(LogicalOperator::And, operands)
    }

    /// Disjunction of `operands`, flattened like [`Expr::and`].
    pub fn or(operands: impl IntoIterator<Item = Expr>) -> Expr {
        Self::logical(LogicalOperator::Or, operands)
    }

    fn logical(op: LogicalOperator, operands: impl IntoIterator<Item = Expr>) -> Expr {
        let mut flat = Vec::new();
        for operand in operands {
            match operand {
                Expr::Logical {
                    op: inner,
                    operands,
                } if inner == op => flat.extend(operands),
                other => flat.push(other),
            }
        }

        if flat.len() == 1 {
            if let Some(single) = flat.pop() {
                return single;
            }
        }
        Expr::Logical { op, operands: flat }
    }

    /// Names of every placeholder in the expression, left to right.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_placeholders(&mut out);
        out
    }

    fn collect_placeholders<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Expr::Placeholder(name) => out.push(name),
            Expr::BinaryOp(op) => {
                op.left.collect_placeholders(out);
                op.right.collect_placeholders(out);
            }
            Expr::Logical { operands, .. } => {
                for operand in operands {
                    operand.collect_placeholders(out);
                }
            }
            Expr::Identifier(_) | Expr::Value(_) => {}
        }
    }
}
