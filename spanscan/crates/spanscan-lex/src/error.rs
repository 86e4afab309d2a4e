//! Error types for spanscan-lex crate

use spanscan_util::SourceMapError;
use thiserror::Error;

use crate::delimiters::DelimiterKind;

/// Error type for delimiter tables and language lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    /// Neither the language nor its family has a registered definition
    #[error("Unknown language: {language} (family: {family})")]
    UnknownLanguage {
        /// Requested language name
        language: String,
        /// Requested language family
        family: String,
    },

    /// A delimiter table contains an empty marker
    #[error("Empty {kind} delimiter in language definition")]
    EmptyDelimiter {
        /// Collection holding the empty marker
        kind: DelimiterKind,
    },
}

/// Error type for annotating a file
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnotateError {
    /// The delimiter table could not be resolved
    #[error(transparent)]
    Language(#[from] LanguageError),

    /// A match could not be mapped back to a source range
    #[error("Failed to map match to source: {0}")]
    SourceMap(#[from] SourceMapError),
}

/// Result type alias for language operations
pub type LanguageResult<T> = std::result::Result<T, LanguageError>;

/// Result type alias for annotation
pub type AnnotateResult<T> = std::result::Result<T, AnnotateError>;
