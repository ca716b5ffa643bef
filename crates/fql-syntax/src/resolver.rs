use std::collections::{BTreeMap, HashMap};

/// Maps a key used in a filter to the column it targets.
///
/// Returning `None` rejects the key; the parser reports it as
/// [`ParseError::UnknownColumn`](crate::parser::error::ParseError).
pub trait ColumnResolver {
    fn resolve_column(&self, key: &str) -> Option<String>;
}

impl<F> ColumnResolver for F
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve_column(&self, key: &str) -> Option<String> {
        self(key)
    }
}

impl ColumnResolver for HashMap<String, String> {
    fn resolve_column(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl ColumnResolver for BTreeMap<String, String> {
    fn resolve_column(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
