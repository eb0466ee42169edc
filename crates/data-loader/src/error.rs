//! Error types for the data-loader crate.
//!
//! Every variant means the dataset is unavailable: the dashboard cannot
//! start without it, so callers abort on any of these.

use thiserror::Error;

/// Errors that can occur while fetching and parsing the ratings table
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// Local file could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the source
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Remote source could not be fetched
    #[error("Failed to fetch {url}: {reason}")]
    FetchError { url: String, reason: String },

    /// The CSV reader rejected the input (bad quoting, ragged rows, ...)
    #[error("CSV error in {source_name}: {reason}")]
    CsvError { source_name: String, reason: String },

    /// Header row is missing a column every row needs
    #[error("Missing required column '{column}' in {source_name}")]
    MissingColumn { source_name: String, column: String },

    /// Row in the table couldn't be parsed
    ///
    /// This variant stores context about where the error occurred
    #[error("Parse error at line {line} in {source_name}: {reason}")]
    ParseError {
        source_name: String,
        line: u64,
        reason: String,
    },

    /// A field parsed but holds a value outside its domain
    #[error("Invalid value for {field} at line {line}: {value}")]
    InvalidValue {
        field: String,
        value: String,
        line: u64,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
