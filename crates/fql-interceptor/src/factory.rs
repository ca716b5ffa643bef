use crate::{
    config::FilterConfig,
    entity::EntityMetadata,
    error::FilterError,
    interceptor::{Filterable, Interceptor},
    request::QueryParams,
};
use tracing::{debug, trace};

/// Builds [`Interceptor`]s from the filter parameter of list requests.
#[derive(Debug, Clone, Default)]
pub struct InterceptorFactory {
    config: FilterConfig,
}

impl InterceptorFactory {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Parses the request's filter against `entity`.
    ///
    /// Returns `Ok(None)` when the request carries no filter or a blank one.
    pub fn create_interceptor(
        &self,
        request: &impl QueryParams,
        entity: &EntityMetadata,
    ) -> Result<Option<Interceptor>, FilterError> {
        let Some(raw) = request.query_param(&self.config.parameter) else {
            trace!(parameter = %self.config.parameter, "No filter parameter");
            return Ok(None);
        };

        let input = raw.trim();
        if input.is_empty() {
            trace!(parameter = %self.config.parameter, "Blank filter parameter");
            return Ok(None);
        }
        if input.len() > self.config.max_length {
            return Err(FilterError::TooLong {
                length: input.len(),
                max: self.config.max_length,
            });
        }

        let ast = fql_syntax::compile(input, entity, &self.config.syntax)?;
        debug!(
            entity = %entity.table(),
            nodes = ast.len(),
            depth = ast.depth(),
            "Created filter interceptor"
        );
        Ok(Some(Interceptor::new(ast, entity.alias())))
    }

    /// Applies the request's filter, if any, to `builder`.
    ///
    /// On error the builder is dropped; it is never returned partially filtered.
    pub fn apply<B: Filterable>(
        &self,
        request: &impl QueryParams,
        builder: B,
        entity: &EntityMetadata,
    ) -> Result<B, FilterError> {
        Ok(match self.create_interceptor(request, entity)? {
            Some(interceptor) => interceptor.intercept(builder),
            None => builder,
        })
    }
}
