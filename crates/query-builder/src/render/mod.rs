//! Defines the core rendering trait and context for converting AST to SQL.

use crate::{ast::select::Select, dialect::Dialect, value::Value};
use indexmap::IndexMap;
use thiserror::Error;
use tracing::debug;

pub mod expr;
pub mod select;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("No value bound for parameter ':{0}'")]
    UnboundParameter(String),
}

/// A trait for any AST node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the SQL string and the positional parameters, and provides
/// access to the dialect for syntax-specific details. Named placeholders are
/// looked up in `named` and emitted as the dialect's next positional
/// placeholder.
pub struct Renderer<'a> {
    pub sql: String,
    pub params: Vec<Value>,
    pub dialect: &'a dyn Dialect,
    named: Option<&'a IndexMap<String, Value>>,
    unbound: Vec<String>,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            dialect,
            named: None,
            unbound: Vec::new(),
        }
    }

    pub fn with_parameters(dialect: &'a dyn Dialect, named: &'a IndexMap<String, Value>) -> Self {
        Self {
            named: Some(named),
            ..Self::new(dialect)
        }
    }

    /// Consumes the renderer and returns the final SQL string and parameters.
    pub fn finish(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }

    /// Like [`Renderer::finish`], but fails if a named placeholder had no value.
    pub fn try_finish(self) -> Result<(String, Vec<Value>), RenderError> {
        if let Some(name) = self.unbound.into_iter().next() {
            return Err(RenderError::UnboundParameter(name));
        }
        Ok((self.sql, self.params))
    }

    pub fn add_param(&mut self, value: Value) {
        self.params.push(value);
        let placeholder = self.dialect.get_placeholder(self.params.len() - 1);
        self.sql.push_str(&placeholder);
    }

    pub fn add_named_param(&mut self, name: &str) {
        match self.named.and_then(|named| named.get(name)) {
            Some(value) => self.add_param(value.clone()),
            None => {
                self.unbound.push(name.to_string());
                self.sql.push(':');
                self.sql.push_str(name);
            }
        }
    }
}

/// Renders a select with its bound parameters into SQL for `dialect`.
pub fn render_select(
    select: &Select,
    dialect: &dyn Dialect,
) -> Result<(String, Vec<Value>), RenderError> {
    let mut renderer = Renderer::with_parameters(dialect, &select.parameters);
    select.render(&mut renderer);
    let (sql, params) = renderer.try_finish()?;
    debug!(
        dialect = %dialect.name(),
        params = params.len(),
        "Rendered select query"
    );
    Ok((sql, params))
}
