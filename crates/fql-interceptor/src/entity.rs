use fql_syntax::ColumnResolver;
use indexmap::IndexMap;
use query_builder::{ast::common::TableRef, table_ref};

/// Describes a filterable entity: its table, the alias it is selected under
/// and the filter keys it accepts.
///
/// Only keys registered with [`EntityMetadata::column`] can appear in a
/// filter; everything else is rejected as an unknown column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMetadata {
    table: String,
    schema: Option<String>,
    alias: String,
    columns: IndexMap<String, String>,
}

impl EntityMetadata {
    pub fn new(table: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            schema: None,
            alias: alias.into(),
            columns: IndexMap::new(),
        }
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Accepts filter key `key` for column `column`.
    pub fn column(mut self, key: impl Into<String>, column: impl Into<String>) -> Self {
        self.columns.insert(key.into(), column.into());
        self
    }

    pub fn columns<I, K, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = (K, C)>,
        K: Into<String>,
        C: Into<String>,
    {
        self.columns
            .extend(columns.into_iter().map(|(k, c)| (k.into(), c.into())));
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn filter_keys(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn table_ref(&self) -> TableRef {
        match &self.schema {
            Some(schema) => table_ref!(schema, self.table),
            None => table_ref!(self.table),
        }
    }
}

impl ColumnResolver for EntityMetadata {
    fn resolve_column(&self, key: &str) -> Option<String> {
        self.columns.get(key).cloned()
    }
}
