use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, FrameError>;

/// Errors produced by fallible frame, index, and selection operations.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("column not found: '{0}'")]
    ColumnNotFound(String),

    #[error("label not found in index: {0}")]
    LabelNotFound(String),

    #[error("label {0} does not match the index dtype")]
    LabelTypeMismatch(String),

    #[error("column '{column}' has {actual} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("invalid date string: '{0}'")]
    InvalidDate(String),

    #[error("cannot infer row count: every column is a scalar")]
    ScalarOnlyColumns,
}
