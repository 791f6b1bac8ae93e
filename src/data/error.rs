//! Data pipeline error types

use thiserror::Error;

/// Errors that can occur while loading or projecting tabular data
#[derive(Error, Debug)]
pub enum DataError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("unparsable cell {value:?} in column {column:?} at data row {row}")]
    BadCell {
        column: String,
        row: usize,
        value: String,
    },

    #[error("unknown column: {0}")]
    UnknownColumn(String),

    #[error("table has no rows")]
    EmptyTable,
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;
