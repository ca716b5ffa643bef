//! Lexer and parser for the filter query language (FQL) carried in the
//! `filter` query parameter of list endpoints.
//!
//! ```text
//! [$and:[[name:$like:'ali'],[age:$gte:18]]]
//! ```

use crate::{lexer::Lexer, parser::Parser};
use tracing::warn;

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod resolver;
pub mod settings;

pub use ast::{
    literal::Literal,
    node::{Ast, AstNode, NodeId, NodeKind},
    operator::Operator,
};
pub use error::SyntaxError;
pub use resolver::ColumnResolver;
pub use settings::{KeywordMode, SyntaxSettings};

/// Lexes and parses `input` into an AST, resolving keys through `resolver`.
pub fn compile<R>(input: &str, resolver: &R, settings: &SyntaxSettings) -> Result<Ast, SyntaxError>
where
    R: ColumnResolver + ?Sized,
{
    let result = Lexer::new(input)
        .with_keyword_mode(settings.keyword_mode)
        .tokenize()
        .map_err(SyntaxError::from)
        .and_then(|tokens| {
            Parser::new(&tokens, resolver)
                .with_max_depth(settings.max_depth)
                .parse()
                .map_err(SyntaxError::from)
        });

    if let Err(err) = &result {
        warn!(error = %err, "Rejected filter expression");
    }
    result
}
