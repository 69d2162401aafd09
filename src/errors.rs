use std::result::Result as StdResult;

use thiserror::Error;

/// Error type shared by record parsing, currencies and configuration.
#[derive(Debug, Error)]
pub enum LimitError {
    #[error("Invalid date `{input}`: expected DD.MM.YYYY")]
    InvalidDate {
        input: String,
        #[source]
        source: Option<chrono::ParseError>,
    },
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("{0} is an unknown currency")]
    UnknownCurrency(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, LimitError>;

impl From<std::io::Error> for LimitError {
    fn from(err: std::io::Error) -> Self {
        LimitError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for LimitError {
    fn from(err: serde_json::Error) -> Self {
        LimitError::Config(err.to_string())
    }
}
