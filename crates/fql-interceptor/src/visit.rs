//! Evaluation of a parsed filter into a query-builder condition.
//!
//! Leaves become `alias.column` operands with their value bound in the
//! [`ParameterBag`]; comparison nodes turn operands into `column <op>
//! :placeholder` conditions and `$and` / `$or` combine whatever their children
//! produce. The AST is only read.

use crate::params::ParameterBag;
use fql_syntax::{Ast, Literal, NodeId, NodeKind, Operator};
use query_builder::{
    ast::expr::{BinaryOperator, Expr, LogicalOperator},
    compare, placeholder, qualified,
    value::Value,
};

/// The result of visiting one node.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// A leaf: the column it targets and the placeholder its value is bound to.
    Operand { column: Expr, placeholder: String },
    /// A complete boolean condition.
    Condition(Expr),
}

impl Fragment {
    /// Turns the fragment into a condition, comparing an operand with `op`.
    pub fn into_condition(self, op: BinaryOperator) -> Expr {
        match self {
            Fragment::Operand {
                column,
                placeholder: name,
            } => compare(column, op, placeholder(&name)),
            Fragment::Condition(expr) => expr,
        }
    }
}

pub fn visit(ast: &Ast, id: NodeId, alias: &str, bag: &mut ParameterBag) -> Option<Fragment> {
    match &ast.node(id).kind {
        NodeKind::KeyValue { key, value } => {
            let bound = match ast.parent_operator(id) {
                Some(Operator::Like) => Value::String(format!("%{}%", value.to_plain_string())),
                _ => literal_value(value),
            };
            let placeholder = bag.bind(key, bound);
            Some(Fragment::Operand {
                column: qualified(alias, key),
                placeholder,
            })
        }
        NodeKind::Composite(op) => {
            let (logical, compare_with) = match comparison(*op) {
                Some(binary) => (LogicalOperator::And, binary),
                None if *op == Operator::Or => (LogicalOperator::Or, BinaryOperator::Eq),
                None => (LogicalOperator::And, BinaryOperator::Eq),
            };

            let conditions: Vec<Expr> = ast
                .children(id)
                .iter()
                .filter_map(|&child| visit(ast, child, alias, bag))
                .map(|fragment| fragment.into_condition(compare_with))
                .collect();

            if conditions.is_empty() {
                None
            } else {
                Some(Fragment::Condition(match logical {
                    LogicalOperator::And => Expr::and(conditions),
                    LogicalOperator::Or => Expr::or(conditions),
                }))
            }
        }
    }
}

fn comparison(op: Operator) -> Option<BinaryOperator> {
    match op {
        Operator::Eq => Some(BinaryOperator::Eq),
        Operator::Neq => Some(BinaryOperator::NotEq),
        Operator::Gt => Some(BinaryOperator::Gt),
        Operator::Gte => Some(BinaryOperator::GtEq),
        Operator::Lt => Some(BinaryOperator::Lt),
        Operator::Lte => Some(BinaryOperator::LtEq),
        Operator::Like => Some(BinaryOperator::Like),
        Operator::And | Operator::Or => None,
    }
}

fn literal_value(literal: &Literal) -> Value {
    match literal {
        Literal::Integer(i) => Value::Int(*i),
        Literal::String(s) => Value::String(s.clone()),
    }
}
