//! Error types
//!
//! All engine errors are caller-input validation failures raised before any
//! combination is evaluated. No partial results are ever returned.

use thiserror::Error;

/// Reach engine validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReachError {
    /// No columns were selected for analysis
    #[error("No columns selected: select at least one column for analysis")]
    NoColumnsSelected,
    /// Subset size text is not an integer
    #[error("Invalid subset size '{0}': must be an integer")]
    InvalidSubsetSize(String),
    /// Subset size outside [1, number of selected columns]
    #[error("Subset size {size} out of range: must be between 1 and {max}")]
    SubsetSizeOutOfRange { size: i128, max: usize },
    /// Selected column is not present in the dataset
    #[error("Unknown column: '{0}'")]
    UnknownColumn(String),
    /// Same column selected more than once
    #[error("Column selected more than once: '{0}'")]
    DuplicateColumn(String),
    /// Dataset has no rows, so reach is undefined
    #[error("Dataset has no rows")]
    EmptyDataset,
    /// C(n, k) exceeds the configured limit
    #[error("Too many combinations: {count} exceeds the limit of {limit}")]
    TooManyCombinations { count: u64, limit: u64 },
}

/// Dataset construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// Dataset has no columns
    #[error("Dataset has no columns")]
    NoColumns,
    /// Two columns share a name
    #[error("Duplicate column name: '{0}'")]
    DuplicateColumn(String),
    /// Column row count differs from the first column
    #[error("Column '{column}' has {found} rows, expected {expected}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },
}

/// Delimited text loading errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Delimiter collides with the quote character or a line break
    #[error("Invalid delimiter {0:?}: must not be a quote or line break")]
    InvalidDelimiter(char),
    /// Input has no header record
    #[error("Input has no header row")]
    MissingHeader,
    /// Header field is blank
    #[error("Header column {0} has an empty name")]
    EmptyHeaderName(usize),
    /// Quoted field is not closed before end of input
    #[error("Unterminated quoted field starting on line {line}")]
    UnterminatedQuote { line: usize },
    /// Record has more fields than the header
    #[error("Line {line} has {found} fields, header has {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// Loaded columns do not form a valid dataset
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
