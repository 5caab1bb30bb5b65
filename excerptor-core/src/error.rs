//! Error types for excerpt breaking

use thiserror::Error;

/// Error type for breaker operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Text is absent or cannot be decoded
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Anchor offset outside `[0, len)`
    #[error("Index out of range: {index} (text length {len})")]
    IndexOutOfRange {
        /// The offending character offset
        index: usize,
        /// Length of the text in characters
        len: usize,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Infrastructure error (I/O, etc.)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

/// Result type for breaker operations
pub type Result<T> = std::result::Result<T, Error>;
