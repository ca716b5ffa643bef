use crate::error::FilterError;
use fql_syntax::{KeywordMode, SyntaxSettings};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_PARAMETER: &str = "filter";
pub const DEFAULT_MAX_LENGTH: usize = 4096;

/// Settings of the filter pipeline for list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Name of the query parameter carrying the filter.
    pub parameter: String,
    /// Longest filter text accepted, in bytes.
    pub max_length: usize,
    pub syntax: SyntaxSettings,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            parameter: DEFAULT_PARAMETER.to_string(),
            max_length: DEFAULT_MAX_LENGTH,
            syntax: SyntaxSettings::default(),
        }
    }
}

impl FilterConfig {
    pub fn from_json(json: &str) -> Result<Self, FilterError> {
        let config: FilterConfig =
            serde_json::from_str(json).map_err(|e| FilterError::Config(e.to_string()))?;
        config.validate()
    }

    /// Reads `FQL_PARAMETER`, `FQL_MAX_LENGTH`, `FQL_MAX_DEPTH` and
    /// `FQL_KEYWORD_MODE`, falling back to the defaults for unset variables.
    pub fn from_env() -> Result<Self, FilterError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`FilterConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, FilterError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = FilterConfig::default();

        if let Some(parameter) = lookup("FQL_PARAMETER") {
            config.parameter = parameter.trim().to_string();
        }
        if let Some(raw) = lookup("FQL_MAX_LENGTH") {
            config.max_length = parse_var("FQL_MAX_LENGTH", &raw)?;
        }
        if let Some(raw) = lookup("FQL_MAX_DEPTH") {
            config.syntax.max_depth = parse_var("FQL_MAX_DEPTH", &raw)?;
        }
        if let Some(raw) = lookup("FQL_KEYWORD_MODE") {
            config.syntax.keyword_mode = KeywordMode::from_str(&raw)
                .map_err(|e| FilterError::Config(format!("FQL_KEYWORD_MODE: {e}")))?;
        }

        config.validate()
    }

    fn validate(self) -> Result<Self, FilterError> {
        if self.parameter.is_empty() {
            return Err(FilterError::Config("parameter name must not be empty".into()));
        }
        if self.max_length == 0 {
            return Err(FilterError::Config("max_length must be positive".into()));
        }
        if self.syntax.max_depth == 0 {
            return Err(FilterError::Config("max_depth must be positive".into()));
        }
        Ok(self)
    }
}

fn parse_var(name: &str, raw: &str) -> Result<usize, FilterError> {
    raw.trim()
        .parse()
        .map_err(|e| FilterError::Config(format!("{name}='{raw}': {e}")))
}
