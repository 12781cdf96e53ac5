//! Error types for csvtexlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or rendering a table
#[derive(Error, Debug)]
pub enum CsvtexError {
    /// Input file does not exist
    #[error("input file does not exist: {0}")]
    NotFound(PathBuf),

    /// A row's field count differs from the header's
    #[error("malformed input at line {line}: expected {expected} fields, found {found}")]
    MalformedInput {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// Input has no header row to name the columns
    #[error("input has no header row")]
    MissingHeader,

    /// Failed to write the rendered table
    #[error("failed to write file '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Input exists but could not be read
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Any other CSV decoding failure
    #[error("CSV error: {0}")]
    Csv(String),
}

impl From<csv::Error> for CsvtexError {
    fn from(err: csv::Error) -> Self {
        match err.kind() {
            csv::ErrorKind::UnequalLengths {
                pos,
                expected_len,
                len,
            } => CsvtexError::MalformedInput {
                line: pos.as_ref().map(|p| p.line()).unwrap_or(0),
                expected: *expected_len as usize,
                found: *len as usize,
            },
            _ => CsvtexError::Csv(err.to_string()),
        }
    }
}
