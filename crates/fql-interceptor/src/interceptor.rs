use crate::{params::ParameterBag, visit::visit};
use fql_syntax::Ast;
use query_builder::{
    ast::expr::{BinaryOperator, Expr},
    build::select::{FromState, SelectBuilder},
    value::Value,
};
use tracing::debug;

/// A query builder a filter condition can be folded into.
pub trait Filterable: Sized {
    fn and_where(self, condition: Expr) -> Self;
    fn set_parameter(self, name: &str, value: Value) -> Self;

    /// Parameter names already in use, bound or referenced by the condition.
    /// A filter never binds any of them.
    fn parameter_names(&self) -> Vec<String>;
}

impl Filterable for SelectBuilder<FromState> {
    fn and_where(self, condition: Expr) -> Self {
        SelectBuilder::and_where(self, condition)
    }

    fn set_parameter(self, name: &str, value: Value) -> Self {
        SelectBuilder::set_parameter(self, name, value)
    }

    fn parameter_names(&self) -> Vec<String> {
        let referenced = self
            .where_condition()
            .map(|condition| condition.placeholders())
            .unwrap_or_default();

        self.parameters()
            .keys()
            .map(String::as_str)
            .chain(referenced)
            .map(str::to_string)
            .collect()
    }
}

/// A compiled filter condition together with the values it refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledFilter {
    pub condition: Expr,
    pub parameters: ParameterBag,
}

/// A parsed filter bound to the alias of the entity it filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interceptor {
    ast: Ast,
    alias: String,
}

impl Interceptor {
    pub fn new(ast: Ast, alias: impl Into<String>) -> Self {
        Self {
            ast,
            alias: alias.into(),
        }
    }

    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Evaluates the filter. Returns `None` when it yields no condition.
    pub fn compile(&self) -> Option<CompiledFilter> {
        self.compile_into(ParameterBag::new())
    }

    /// Like [`Interceptor::compile`], with placeholder names chosen so they
    /// avoid every name in `taken`.
    pub fn compile_avoiding<I>(&self, taken: I) -> Option<CompiledFilter>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.compile_into(ParameterBag::reserving(taken))
    }

    fn compile_into(&self, mut parameters: ParameterBag) -> Option<CompiledFilter> {
        let condition = visit(&self.ast, self.ast.root(), &self.alias, &mut parameters)
            .map(|fragment| fragment.into_condition(BinaryOperator::Eq))?;
        Some(CompiledFilter {
            condition,
            parameters,
        })
    }

    /// ANDs the filter into `builder`'s WHERE clause and binds its parameters.
    /// Parameters the builder already uses are left untouched.
    pub fn intercept<B: Filterable>(&self, builder: B) -> B {
        let Some(filter) = self.compile_avoiding(builder.parameter_names()) else {
            debug!(alias = %self.alias, "Filter produced no condition");
            return builder;
        };

        debug!(
            alias = %self.alias,
            parameters = filter.parameters.len(),
            "Applying filter condition"
        );

        filter
            .parameters
            .into_iter()
            .fold(builder.and_where(filter.condition), |builder, (name, value)| {
                builder.set_parameter(&name, value)
            })
    }
}
