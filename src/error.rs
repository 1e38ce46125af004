//! Error types for the spelltrie library.
//!
//! Only construction and the command line surface can fail: loading a
//! vocabulary, reading a configuration file or an input text. Normalization,
//! trie operations and fuzzy search are total and never return errors.
//!
//! # Examples
//!
//! ```
//! use spelltrie::error::{SpelltrieError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpelltrieError::dictionary("Cannot open words.txt"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for spelltrie operations.
#[derive(Error, Debug)]
pub enum SpelltrieError {
    /// I/O errors (file operations, terminal interaction)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The vocabulary source could not be read
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Configuration values out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SpelltrieError.
pub type Result<T> = std::result::Result<T, SpelltrieError>;

impl SpelltrieError {
    /// Create a new dictionary construction error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        SpelltrieError::Dictionary(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SpelltrieError::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SpelltrieError::dictionary("cannot open words.txt");
        assert_eq!(error.to_string(), "Dictionary error: cannot open words.txt");

        let error = SpelltrieError::invalid_config("distance too large");
        assert_eq!(error.to_string(), "Invalid configuration: distance too large");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = SpelltrieError::from(io_error);

        match error {
            SpelltrieError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
