//! Errors produced while loading a workbook or computing a change.

use std::path::PathBuf;
use thiserror::Error;

/// Rejected input to [`crate::change::percent_change`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("zero baseline")]
    ZeroBaseline,

    #[error("negative population: {0}")]
    NegativePopulation(i64),
}

/// A row that cannot be projected into a record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("malformed row: {reason}")]
pub struct MalformedRow {
    pub reason: String,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("workbook not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("sheet `{sheet}` not found in {} (available: {})", path.display(), available.join(", "))]
    SheetNotFound {
        path: PathBuf,
        sheet: String,
        available: Vec<String>,
    },

    #[error(transparent)]
    MalformedRow(#[from] MalformedRow),

    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("failed to read workbook {}: {source}", path.display())]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
