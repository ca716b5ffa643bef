//! Recursive-descent parser for filter expressions.
//!
//! ```text
//! Filter     := ScopedExpr
//! ScopedExpr := '[' Clause (',' Clause)* ']'
//! Clause     := RawExpr | MapExpr | ScopedExpr
//! RawExpr    := Operator ':' ScopedExpr
//! MapExpr    := Key ':' Value | Key ':' Operator ':' Value
//! ```
//!
//! The node that clauses attach to is always the top of an explicit scope
//! stack. A raw expression pushes its node before descending into its
//! brackets and pops it after the matching `]`. A bare `[...]` group does
//! not open a new scope; its clauses join the enclosing operator.

use crate::{
    ast::{
        literal::Literal,
        node::{Ast, NodeId},
        operator::Operator,
    },
    lexer::token::{Token, TokenKind},
    parser::error::ParseError,
    resolver::ColumnResolver,
    settings::DEFAULT_MAX_DEPTH,
};
use tracing::{debug, trace};

pub mod error;

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses `tokens` into an [`Ast`], resolving every key through `resolver`.
pub fn parse<R>(tokens: &[Token], resolver: &R) -> ParseResult<Ast>
where
    R: ColumnResolver + ?Sized,
{
    Parser::new(tokens, resolver).parse()
}

pub struct Parser<'a, R: ?Sized> {
    tokens: &'a [Token],
    position: usize,
    resolver: &'a R,
    ast: Ast,
    scopes: Vec<NodeId>,
    depth: usize,
    max_depth: usize,
}

impl<'a, R> Parser<'a, R>
where
    R: ColumnResolver + ?Sized,
{
    pub fn new(tokens: &'a [Token], resolver: &'a R) -> Self {
        Parser {
            tokens,
            position: 0,
            resolver,
            ast: Ast::new(),
            scopes: Vec::new(),
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn parse(mut self) -> ParseResult<Ast> {
        if self.tokens.is_empty() {
            return Err(ParseError::EmptyFilter);
        }

        self.scopes.push(self.ast.root());
        self.parse_scoped_expr()?;
        self.scopes.pop();

        self.check_trailing()?;

        debug!(
            nodes = self.ast.len(),
            depth = self.ast.depth(),
            "Filter parsed"
        );
        Ok(self.ast)
    }

    fn parse_scoped_expr(&mut self) -> ParseResult<()> {
        let open = self.expect(TokenKind::OpenBracket, "'['")?;

        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(ParseError::TooDeep {
                max: self.max_depth,
            });
        }

        if self.check(&TokenKind::CloseBracket) {
            return Err(ParseError::EmptyScope {
                position: open.span.start,
            });
        }

        loop {
            self.parse_clause()?;

            let Some(token) = self.peek() else {
                return Err(ParseError::MissingCloseBracket);
            };

            match token.kind {
                TokenKind::Comma => {
                    self.advance();
                    match self.peek() {
                        Some(next) if next.kind != TokenKind::CloseBracket => {}
                        _ => {
                            return Err(ParseError::ExpectedClause {
                                position: token.span.start,
                            });
                        }
                    }
                }
                TokenKind::CloseBracket => {
                    self.advance();
                    break;
                }
                _ => {
                    return Err(ParseError::ExpectedToken {
                        expected: "',' or ']'",
                        found: token.kind.to_string(),
                        position: token.span.start,
                    });
                }
            }
        }

        self.depth -= 1;
        Ok(())
    }

    fn parse_clause(&mut self) -> ParseResult<()> {
        let Some(token) = self.peek() else {
            return Err(ParseError::MissingCloseBracket);
        };

        match &token.kind {
            TokenKind::Operator(op) => self.parse_raw_expr(*op, token),
            TokenKind::Identifier(_) | TokenKind::String(_) => self.parse_map_expr(),
            TokenKind::OpenBracket => self.parse_scoped_expr(),
            TokenKind::CloseBracket => Err(ParseError::EmptyScope {
                position: token.span.start,
            }),
            TokenKind::Integer(_) | TokenKind::Colon | TokenKind::Comma => {
                Err(ParseError::UnexpectedToken {
                    found: token.kind.to_string(),
                    position: token.span.start,
                })
            }
        }
    }

    fn parse_raw_expr(&mut self, op: Operator, token: &Token) -> ParseResult<()> {
        self.advance();

        let parent = self.current_scope();
        let node = self.ast.push_composite(op, parent);
        trace!(operator = %op, node = node.index(), "Entering scope");
        self.scopes.push(node);

        self.expect(TokenKind::Colon, "':'")?;
        self.parse_scoped_expr()?;

        self.scopes.pop();
        trace!(operator = %op, node = node.index(), "Leaving scope");

        if op.is_comparison()
            && self
                .ast
                .children(node)
                .iter()
                .any(|child| !self.ast.node(*child).is_leaf())
        {
            return Err(ParseError::InvalidOperand {
                operator: op,
                position: token.span.start,
            });
        }

        Ok(())
    }

    fn parse_map_expr(&mut self) -> ParseResult<()> {
        let key = match self.advance().map(|t| &t.kind) {
            Some(TokenKind::Identifier(key)) | Some(TokenKind::String(key)) => key.clone(),
            _ => return Err(ParseError::UnexpectedEnd { expected: "a key" }),
        };

        self.expect(TokenKind::Colon, "':'")?;

        let column = self
            .resolver
            .resolve_column(&key)
            .ok_or_else(|| ParseError::UnknownColumn { key: key.clone() })?;

        let parent = self.current_scope();

        if let Some(token) = self.peek() {
            if let TokenKind::Operator(op) = token.kind {
                if op.is_logical() {
                    return Err(ParseError::ExpectedToken {
                        expected: "a comparison operator or a value",
                        found: token.kind.to_string(),
                        position: token.span.start,
                    });
                }
                self.advance();
                self.expect(TokenKind::Colon, "':'")?;
                let value = self.expect_value()?;

                let node = self.ast.push_composite(op, parent);
                trace!(key = %key, column = %column, operator = %op, "Comparison clause");
                self.ast.push_leaf(column, value, node);
                return Ok(());
            }
        }

        let value = self.expect_value()?;
        trace!(key = %key, column = %column, "Key/value clause");
        self.ast.push_leaf(column, value, parent);
        Ok(())
    }

    fn expect_value(&mut self) -> ParseResult<Literal> {
        match self.peek() {
            Some(Token {
                kind: TokenKind::Integer(n),
                ..
            }) => {
                let value = Literal::Integer(*n);
                self.advance();
                Ok(value)
            }
            Some(Token {
                kind: TokenKind::String(s),
                ..
            }) => {
                let value = Literal::String(s.clone());
                self.advance();
                Ok(value)
            }
            Some(token) => Err(ParseError::ExpectedToken {
                expected: "an integer or string value",
                found: token.kind.to_string(),
                position: token.span.start,
            }),
            None => Err(ParseError::UnexpectedEnd {
                expected: "an integer or string value",
            }),
        }
    }

    /// Anything left after the outermost `]` is an error. When only `]`
    /// remain, the error reports how many have no opening partner.
    fn check_trailing(&self) -> ParseResult<()> {
        let rest = &self.tokens[self.position..];
        if rest.is_empty() {
            return Ok(());
        }

        match rest.iter().find(|t| t.kind != TokenKind::CloseBracket) {
            Some(stray) => Err(ParseError::UnexpectedToken {
                found: stray.kind.to_string(),
                position: stray.span.start,
            }),
            None => Err(ParseError::UnmatchedCloseBracket { count: rest.len() }),
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> ParseResult<&'a Token> {
        match self.peek() {
            Some(token) if token.kind == kind => {
                self.advance();
                Ok(token)
            }
            Some(token) => Err(ParseError::ExpectedToken {
                expected,
                found: token.kind.to_string(),
                position: token.span.start,
            }),
            None if kind == TokenKind::CloseBracket => Err(ParseError::MissingCloseBracket),
            None => Err(ParseError::UnexpectedEnd { expected }),
        }
    }

    fn check(&self, kind: &TokenKind) -> bool {
        self.peek().is_some_and(|t| &t.kind == kind)
    }

    fn current_scope(&self) -> NodeId {
        self.scopes.last().copied().unwrap_or_else(|| self.ast.root())
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.position);
        if token.is_some() {
            self.position += 1;
        }
        token
    }
}
