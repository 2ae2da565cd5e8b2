//! Error types for the typotrie library.
//!
//! The lookup path itself never fails: an empty result is a value, not an
//! error. Errors come from the fallible surfaces around it, such as loading
//! dictionaries and configuration files or validating query parameters.
//!
//! # Examples
//!
//! ```
//! use typotrie::error::{Result, TypoError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TypoError::invalid_argument("max_distance must be finite"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for typotrie operations.
#[derive(Error, Debug)]
pub enum TypoError {
    /// I/O errors (reading dictionaries, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed dictionary input
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Invalid argument passed to an operation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for operations that may fail with TypoError.
pub type Result<T> = std::result::Result<T, TypoError>;

impl TypoError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TypoError::Config(msg.into())
    }

    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        TypoError::Dictionary(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TypoError::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = TypoError::config("negative max_distance");
        assert_eq!(
            error.to_string(),
            "Configuration error: negative max_distance"
        );

        let error = TypoError::dictionary("line 3 is not valid UTF-8");
        assert_eq!(error.to_string(), "Dictionary error: line 3 is not valid UTF-8");

        let error = TypoError::invalid_argument("empty query");
        assert_eq!(error.to_string(), "Invalid argument: empty query");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = TypoError::from(io_error);

        match error {
            TypoError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
