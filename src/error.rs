//! Error types for Dormir operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Dormir operations.
///
/// Provides detailed context about failures including missing files,
/// malformed CSV content, mismatched sequence lengths, and datasets that
/// fail validation.
///
/// # Examples
///
/// ```
/// use dormir::error::DormirError;
///
/// let err = DormirError::ShapeMismatch {
///     expected: 5,
///     actual: 3,
/// };
/// assert!(err.to_string().contains("shape mismatch"));
/// ```
#[derive(Debug)]
pub enum DormirError {
    /// Input file does not exist.
    NotFound {
        /// Path that was requested
        path: String,
    },

    /// Malformed delimited content (ragged rows, broken quoting).
    ParseError {
        /// 1-based line number where parsing failed (0 if unknown)
        line: u64,
        /// Parser error description
        message: String,
    },

    /// Requested column is not present in the dataset.
    ColumnNotFound {
        /// Column name that was requested
        name: String,
    },

    /// Sequence lengths don't match for the operation.
    ShapeMismatch {
        /// Expected length
        expected: usize,
        /// Actual length found
        actual: usize,
    },

    /// Input is mathematically degenerate for the requested metric.
    DegenerateInput {
        /// What made the input degenerate
        context: String,
    },

    /// Dataset failed a schema or construction check.
    ValidationError {
        /// Validation failure message
        message: String,
    },

    /// I/O error (permission denied, read failure, etc.).
    Io(std::io::Error),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for DormirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DormirError::NotFound { path } => {
                write!(f, "file not found: {path}")
            }
            DormirError::ParseError { line, message } => {
                write!(f, "CSV parse error at line {line}: {message}")
            }
            DormirError::ColumnNotFound { name } => {
                write!(f, "column not found: '{name}'")
            }
            DormirError::ShapeMismatch { expected, actual } => {
                write!(
                    f,
                    "shape mismatch: expected length {expected}, got {actual}"
                )
            }
            DormirError::DegenerateInput { context } => {
                write!(f, "degenerate input: {context}")
            }
            DormirError::ValidationError { message } => {
                write!(f, "validation failed: {message}")
            }
            DormirError::Io(e) => write!(f, "I/O error: {e}"),
            DormirError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for DormirError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DormirError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DormirError {
    fn from(err: std::io::Error) -> Self {
        DormirError::Io(err)
    }
}

impl From<&str> for DormirError {
    fn from(msg: &str) -> Self {
        DormirError::Other(msg.to_string())
    }
}

impl From<String> for DormirError {
    fn from(msg: String) -> Self {
        DormirError::Other(msg)
    }
}

impl DormirError {
    /// Create a shape mismatch error from two observed lengths
    #[must_use]
    pub fn shape_mismatch(expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch { expected, actual }
    }

    /// Create a validation error with a descriptive message
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, DormirError>;
