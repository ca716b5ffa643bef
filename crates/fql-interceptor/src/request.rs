//! Access to the query parameters of an incoming list request.

use crate::error::FilterError;
use std::{collections::HashMap, str::FromStr};

pub trait QueryParams {
    /// Decoded value of the first parameter called `name`.
    fn query_param(&self, name: &str) -> Option<String>;
}

impl QueryParams for HashMap<String, String> {
    fn query_param(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// A decoded `application/x-www-form-urlencoded` query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    pub fn parse(raw: &str) -> Result<Self, FilterError> {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let pairs = raw
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| -> Result<(String, String), FilterError> {
                let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
                Ok((decode(name)?, decode(value)?))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { pairs })
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl FromStr for QueryString {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl QueryParams for QueryString {
    fn query_param(&self, name: &str) -> Option<String> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }
}

fn decode(component: &str) -> Result<String, FilterError> {
    let component = component.replace('+', " ");
    urlencoding::decode(&component)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| FilterError::InvalidQueryString(e.to_string()))
}
