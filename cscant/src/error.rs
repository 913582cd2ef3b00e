//! Error handling module for the cscant CLI.
//!
//! Lexing itself cannot fail; these errors cover everything around it:
//! configuration, reading input, writing output and logging setup.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the cscant CLI application.
#[derive(Error, Debug)]
pub enum CscantError {
    /// Error when a configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when the source file cannot be read.
    #[error("Failed to read {}: {source}", path.display())]
    Input {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when the logging subscriber cannot be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using CscantError.
pub type Result<T> = std::result::Result<T, CscantError>;
