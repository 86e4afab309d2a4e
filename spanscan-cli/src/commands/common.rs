//! Common types and utilities for spanscan commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use spanscan_util::SourceFile;

use crate::error::{Result, SpanscanError};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for annotation results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One range per line: `file:line:col-line:col<TAB>kind`
    #[default]
    Text,
    /// A JSON array with one object per file
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

// ============================================================================
// Source Files
// ============================================================================

/// Read a source file into a [`SourceFile`] labelled with its path.
///
/// # Errors
/// Fails if the path is not a readable file or is not valid UTF-8.
pub fn read_source(path: &Path) -> Result<SourceFile> {
    if !path.is_file() {
        return Err(SpanscanError::FileOperation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        SpanscanError::FileOperation(format!("Failed to read {}: {}", path.display(), e))
    })?;
    Ok(SourceFile::from_text(path.display().to_string(), content))
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
///
/// These constants provide consistent error messages across all commands.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when no language is given or detected for a file.
    pub const UNDETECTED_LANGUAGE: &str = "Cannot detect the language of";

    /// Error when files failed to process.
    pub const FILES_FAILED: &str = "file(s) failed to process";
}
