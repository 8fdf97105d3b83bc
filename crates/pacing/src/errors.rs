use thiserror::Error;

use crate::file_parsers::ParseError;

/// Structural failures. Bad split values are never an error; they show up
/// as undefined indices instead.
#[derive(Error, Debug)]
pub enum PacingError {
    #[error("Reference pattern needs at least one trial with valid splits")]
    EmptyBatch,

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
