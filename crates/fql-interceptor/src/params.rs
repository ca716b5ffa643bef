//! Named parameters collected while a filter is compiled.

use indexmap::{IndexMap, IndexSet};
use query_builder::value::Value;
use serde::Serialize;
use tracing::trace;

/// Ordered placeholder name -> value map.
///
/// Names are derived from column names. A column that is bound more than once
/// gets an ordinal suffix (`age`, `age_1`, `age_2`, ...) so no binding is ever
/// overwritten. Reserved names belong to someone else and are skipped the
/// same way.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParameterBag {
    values: IndexMap<String, Value>,
    #[serde(skip)]
    reserved: IndexSet<String>,
}

impl ParameterBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// A bag that never hands out any of `names`.
    pub fn reserving<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            values: IndexMap::new(),
            reserved: names.into_iter().map(Into::<String>::into).collect(),
        }
    }

    /// Binds `value` for `column` and returns the placeholder name to use.
    pub fn bind(&mut self, column: &str, value: Value) -> String {
        let base = placeholder_name(column);
        let mut name = base.clone();
        let mut ordinal = 1;
        while self.values.contains_key(&name) || self.reserved.contains(&name) {
            name = format!("{base}_{ordinal}");
            ordinal += 1;
        }

        trace!(placeholder = %name, value = %value, "Bound filter parameter");
        self.values.insert(name.clone(), value);
        name
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl IntoIterator for ParameterBag {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParameterBag {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// `profile.city` -> `profile_city`.
fn placeholder_name(column: &str) -> String {
    let name: String = column
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if name.is_empty() {
        "param".to_string()
    } else {
        name
    }
}
