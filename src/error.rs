use thiserror::Error;

use crate::geo::ParseError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("line {line}: {source}")]
    InvalidCoordinate {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("line {line}: malformed record: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("filter worker failed: {0}")]
    Worker(String),
}

impl AppError {
    pub fn line(&self) -> Option<usize> {
        match self {
            AppError::InvalidCoordinate { line, .. } | AppError::Malformed { line, .. } => {
                Some(*line)
            }
            _ => None,
        }
    }
}
