use fql_syntax::SyntaxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Invalid filter expression: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("Invalid query string: {0}")]
    InvalidQueryString(String),

    #[error("Filter expression is {length} bytes long, at most {max} are allowed")]
    TooLong { length: usize, max: usize },

    #[error("Invalid filter configuration: {0}")]
    Config(String),
}

impl FilterError {
    /// Whether the request, rather than the server setup, caused the error.
    /// List endpoints answer these with "bad filter expression".
    pub fn is_client_error(&self) -> bool {
        !matches!(self, FilterError::Config(_))
    }
}
