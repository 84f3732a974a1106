//! Единый тип ошибок публичного API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DilemmaError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Amount sum overflows the decimal range")]
    Overflow,

    #[error("Amount sum cannot be represented without rounding")]
    Inexact,

    #[error("Too many candidates for exhaustive search (count={count}, max={max})")]
    TooManyCandidates { count: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, DilemmaError>;
