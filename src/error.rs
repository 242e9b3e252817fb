//! All error types for the localized-enum crate.
//!
//! Resolution itself never fails: these errors only surface from the
//! explicit loading APIs (`Resolver::try_load_table`, the parsers, and
//! `install`). The resolver logs them and falls back to raw identifiers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown format `{0}`")]
    UnknownFormat(String),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("syntax error on line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("invalid locale `{0}`")]
    InvalidLocale(String),

    #[error("a global resolver is already installed")]
    AlreadyInstalled,
}

impl Error {
    /// Creates a new syntax error at the given 1-based line.
    pub fn syntax_error(line: usize, message: impl Into<String>) -> Self {
        Error::Syntax {
            line,
            message: message.into(),
        }
    }
}
