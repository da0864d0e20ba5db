//! Error types for the Restyle library.
//!
//! The text transformation itself never fails: every input string, however
//! odd, produces an output. Errors only arise at the edges, when reading
//! configuration or synonym files and when the command line is driven with
//! bad input. All of them are represented by [`RestyleError`].
//!
//! # Examples
//!
//! ```
//! use restyle::error::{RestyleError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(RestyleError::invalid_argument("Please provide some text first"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Restyle operations.
#[derive(Error, Debug)]
pub enum RestyleError {
    /// I/O errors (reading input, writing output, loading files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Synonym dictionary errors
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Invalid caller input (for example, empty text handed to the CLI)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic anyhow error
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with RestyleError.
pub type Result<T> = std::result::Result<T, RestyleError>;

impl RestyleError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        RestyleError::Config(msg.into())
    }

    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        RestyleError::Dictionary(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        RestyleError::InvalidArgument(msg.into())
    }
}
