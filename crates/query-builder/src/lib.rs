//! A small typed SQL `SELECT` builder with named parameters and
//! dialect-aware rendering.

use crate::{
    ast::expr::{BinaryOp, BinaryOperator, Expr, Ident},
    value::Value,
};

pub mod ast;
pub mod build;
pub mod dialect;
pub mod macros;
pub mod render;
pub mod value;

pub fn ident(name: &str) -> Expr {
    Expr::Identifier(Ident {
        qualifier: None,
        name: name.to_string(),
    })
}

pub fn qualified(qualifier: &str, name: &str) -> Expr {
    Expr::Identifier(Ident {
        qualifier: Some(qualifier.to_string()),
        name: name.to_string(),
    })
}

pub fn value(val: Value) -> Expr {
    Expr::Value(val)
}

/// A named parameter reference, bound later with `set_parameter`.
pub fn placeholder(name: &str) -> Expr {
    Expr::Placeholder(name.to_string())
}

pub fn compare(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::BinaryOp(Box::new(BinaryOp { left, op, right }))
}
