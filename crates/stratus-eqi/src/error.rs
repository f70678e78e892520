//! Error types for table queries

use arrow::error::ArrowError;
use thiserror::Error;

/// Result type alias for table queries
pub type Result<T> = std::result::Result<T, EqiError>;

/// Errors raised by [`Tabular`](crate::Tabular) operations and [`Eqi`](crate::Eqi)
#[derive(Debug, Error)]
pub enum EqiError {
    /// No column with this name
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// An index lookup on a table with no index column
    #[error("No index column set")]
    NoIndex,

    /// Arguments that cannot describe a valid query
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Error from an Arrow kernel
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),
}

impl EqiError {
    /// `true` for a missing column or index.
    pub fn is_lookup_error(&self) -> bool {
        matches!(self, EqiError::ColumnNotFound(_) | EqiError::NoIndex)
    }
}
