// src/error.rs
use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Everything that can abort a scrape.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// A table row did not have the expected shape. `row` is zero-based, in table order.
    #[error("row {row}: {error}")]
    Row { row: usize, error: RowError },

    /// No element matched the table selector.
    #[error("table not found: nothing matches `{0}`")]
    TableNotFound(&'static str),

    #[error("invalid selector: {0}")]
    Selector(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ScrapeError {
    pub fn row(row: usize, error: RowError) -> Self {
        ScrapeError::Row { row, error }
    }
}

/// Per-row extraction failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    /// A cell or child element the extraction walks through is missing.
    #[error("malformed row: {0}")]
    Malformed(&'static str),

    /// The element was found but does not carry the attribute.
    #[error("element has no `{0}` attribute")]
    MissingAttribute(&'static str),

    /// A cell's `alt` label is not one of the known columns.
    #[error("unknown column label {0:?}")]
    UnknownColumn(String),
}
