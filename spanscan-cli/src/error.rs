//! Error handling module for the spanscan CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use spanscan_lex::{AnnotateError, LanguageError};
use thiserror::Error;

/// Main error type for the spanscan CLI application.
#[derive(Error, Debug)]
pub enum SpanscanError {
    /// Error when the configuration cannot be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when a language cannot be resolved or defined.
    #[error(transparent)]
    Language(#[from] LanguageError),

    /// Error when file operations fail.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<AnnotateError> for SpanscanError {
    fn from(err: AnnotateError) -> Self {
        match err {
            AnnotateError::Language(err) => Self::Language(err),
            AnnotateError::SourceMap(err) => Self::FileOperation(err.to_string()),
        }
    }
}

/// Result type alias using SpanscanError.
pub type Result<T> = std::result::Result<T, SpanscanError>;
