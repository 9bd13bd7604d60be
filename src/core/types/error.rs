use std::io;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    Custom(String),
}

/// Failures at the parser boundary. Any of these on the original source aborts the run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("Failed to load the {language} grammar: {reason}")]
    Language {
        language: &'static str,
        reason: String,
    },

    #[error("Parser returned no tree")]
    NoTree,

    #[error("Syntax error at line {line}, column {column}")]
    Syntax { line: usize, column: usize },

    #[error("Unsupported operator `{operator}` at line {line}")]
    UnsupportedOperator { operator: String, line: usize },
}
