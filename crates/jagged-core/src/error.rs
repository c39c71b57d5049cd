//! Error types for jagged-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in jagged-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Negative index passed to a mutating operation
    #[error("Invalid index: {0} (must not be negative)")]
    InvalidIndex(isize),

    /// Read addressed a row with no backing storage
    #[error("Row {row} not found (rows: {rows})")]
    RowNotFound { row: isize, rows: usize },

    /// Attempt to store an absent value where a value is required
    #[error("Cannot store an absent value at index {index}")]
    NullValue { index: isize },

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}

/// Convert a signed index into a storage offset, rejecting negative values.
pub(crate) fn checked_index(index: isize) -> Result<usize> {
    usize::try_from(index).map_err(|_| Error::InvalidIndex(index))
}
