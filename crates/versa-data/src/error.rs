//! Error types for dataset handling

use thiserror::Error;
use versa_domain::LearnError;

/// Result type alias for data operations
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading or encoding a dataset
#[derive(Error, Debug)]
pub enum DataError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The dataset has no rows
    #[error("Dataset contains no rows")]
    EmptyDataset,

    /// The header needs at least one attribute and the label column
    #[error("Dataset needs at least one attribute column and a label column")]
    MissingLabelColumn,

    /// A row does not have one cell per header column
    #[error("Row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row index
        row: usize,
        /// Header width
        expected: usize,
        /// Cells found
        actual: usize,
    },

    /// A cell is null, an array or an object
    #[error("Row {row}, column '{column}': cell must be a string, number or boolean")]
    InvalidCell {
        /// Zero-based row index
        row: usize,
        /// Column name
        column: String,
    },

    /// A label cell is not a recognised truth value
    #[error("Row {row}: unknown label '{value}'")]
    UnknownLabel {
        /// Zero-based row index
        row: usize,
        /// Offending label text
        value: String,
    },

    /// A value was never seen for this attribute while fitting
    #[error("Unknown value '{value}' for attribute '{column}'")]
    UnknownValue {
        /// Attribute name
        column: String,
        /// Offending value
        value: String,
    },

    /// An attribute has more distinct values than a code can hold
    #[error("Attribute '{column}' has more than 255 distinct values")]
    TooManyValues {
        /// Attribute name
        column: String,
    },

    /// Error from the learning core
    #[error(transparent)]
    Learn(#[from] LearnError),
}
