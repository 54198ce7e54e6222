//! Error types for string operations

use thiserror::Error;

/// Result type for string operations
pub type Result<T> = std::result::Result<T, StringTaskError>;

/// Errors raised by string operations on malformed input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StringTaskError {
    /// The operation needs at least one character
    #[error("{operation} requires a non-empty string")]
    EmptyInput {
        /// Operation that received the empty input
        operation: &'static str,
    },

    /// Input does not follow the `Hello, <name>!` greeting pattern
    #[error("'{0}' is not a greeting of the form 'Hello, <first> <last>!'")]
    MalformedGreeting(String),

    /// Rectangle dimensions too small to hold the corners
    #[error("Rectangle must be at least 2x2, got {width}x{height}")]
    InvalidRectangle {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// Output would exceed [`MAX_RESULT_BYTES`](crate::strings::MAX_RESULT_BYTES)
    #[error("{operation} result would exceed {limit} bytes")]
    ResultTooLarge {
        /// Operation whose output is too large
        operation: &'static str,
        /// Maximum output size in bytes
        limit: usize,
    },

    /// Token is not a rank followed by a suit symbol
    #[error("Invalid card token '{0}'")]
    InvalidCard(String),
}
