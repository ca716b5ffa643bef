use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub const DEFAULT_MAX_DEPTH: usize = 32;

/// How the lexer treats a `$word` that is not an operator keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordMode {
    /// Reject the filter with [`LexError::UnknownKeyword`](crate::lexer::error::LexError).
    #[default]
    Strict,
    /// Drop the word without emitting a token.
    Lenient,
}

impl FromStr for KeywordMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(KeywordMode::Strict),
            "lenient" => Ok(KeywordMode::Lenient),
            other => Err(format!("unknown keyword mode '{}'", other)),
        }
    }
}

impl fmt::Display for KeywordMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeywordMode::Strict => write!(f, "strict"),
            KeywordMode::Lenient => write!(f, "lenient"),
        }
    }
}

/// Knobs shared by the lexer and the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntaxSettings {
    pub keyword_mode: KeywordMode,
    /// Maximum bracket nesting accepted by the parser.
    pub max_depth: usize,
}

impl Default for SyntaxSettings {
    fn default() -> Self {
        SyntaxSettings {
            keyword_mode: KeywordMode::Strict,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
