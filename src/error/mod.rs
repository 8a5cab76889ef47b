//! Error handling for the `DemographicAnalyzer`.

use std::io;

use crate::models::summary::Statistic;

/// Specialized error type for loading and analyzing demographic data
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    /// A record does not have the fixed number of columns
    #[error("Malformed row {row}: expected {expected} fields, found {found}")]
    MalformedRow {
        /// Zero-based position of the record in the dataset
        row: usize,
        /// Number of fields the schema requires
        expected: usize,
        /// Number of fields actually present
        found: usize,
    },

    /// A statistic was requested over an empty candidate subset
    #[error("Cannot compute {statistic}: no rows in the candidate subset")]
    EmptySubset {
        /// The statistic that could not be computed
        statistic: Statistic,
    },

    /// A field expected to be numeric could not be parsed
    #[error("Row {row}: cannot parse {column} value {value:?} as a number")]
    Coercion {
        /// Zero-based position of the offending row
        row: usize,
        /// Name of the column being coerced
        column: &'static str,
        /// The raw field value
        value: String,
    },

    /// Error opening or reading an input file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding delimited text
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AnalyzerError {
    /// Shorthand for an [`AnalyzerError::EmptySubset`]
    #[must_use]
    pub const fn empty(statistic: Statistic) -> Self {
        Self::EmptySubset { statistic }
    }
}

/// Result type for `DemographicAnalyzer` operations
pub type Result<T> = std::result::Result<T, AnalyzerError>;
