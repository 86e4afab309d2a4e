//! spanscan-lex - String and Comment Span Detection
//!
//! This crate locates string literals and comments in source files written
//! in any language whose quoting and commenting conventions can be described
//! by a [`DelimiterTable`]. It does not tokenize: it only reports where the
//! strings and comments are.
//!
//! # Overview
//!
//! Annotation is a pure function of the file text and the delimiter table.
//! It runs four stages, strictly in order:
//!
//! 1. **Delimiter table** - looked up once per file from a
//!    [`LanguageRegistry`].
//! 2. **Paired scan** - strings and multi-line strings (escape-aware), then
//!    multi-line comments ([`scan::paired`]).
//! 3. **Line scan** - line comments, each running to the end of its line
//!    ([`scan::line`]).
//! 4. **Resolution** - every match that starts within another one is
//!    dropped ([`resolve`]), and the survivors are split by kind.
//!
//! # Example Usage
//!
//! ```
//! use spanscan_lex::{annotate_lines, LanguageRegistry};
//!
//! let registry = LanguageRegistry::with_builtins();
//! let lines = ["x = 'hello'  # a comment\n"];
//!
//! let found = annotate_lines("demo.py", &lines, &registry, "python", "python").unwrap();
//! assert_eq!(found.strings[0].to_string(), "demo.py:1:5-1:11");
//! assert_eq!(found.comments[0].to_string(), "demo.py:1:14-1:24");
//! ```
//!
//! # Module Structure
//!
//! - [`delimiters`] - Delimiter tables and their builder
//! - [`language`] - Built-in languages and the registry
//! - [`scan`] - Paired and line-comment scanners
//! - [`resolve`] - Overlap resolution
//! - [`cursor`] - Marker cursor for source traversal
//!
//! # Overlap Rules
//!
//! A match is dropped when it starts within a different match:
//!
//! - both start at the same character and it ends first, as a `'` string
//!   inside a `'''` string does, or
//! - it starts after the other one starts and no later than its last
//!   character, as a `#` inside a string does.
//!
//! Ranges are reported with inclusive ends, character offsets and 1-based
//! lines and columns.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod delimiters;
pub mod error;
pub mod language;
pub mod resolve;
pub mod scan;

mod edge_cases;

use serde::Serialize;
use spanscan_util::{SourceFile, SourceRange};
use tracing::debug;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use delimiters::{DelimiterKind, DelimiterPairs, DelimiterTable, DelimiterTableBuilder, LineMarkers};
pub use error::{AnnotateError, AnnotateResult, LanguageError, LanguageResult};
pub use language::LanguageRegistry;
pub use scan::{Match, MatchKind};

/// Strings and comments found in one file
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Annotations {
    /// String and multi-line string ranges, in discovery order
    pub strings: Vec<SourceRange>,
    /// Multi-line and line comment ranges, in discovery order
    pub comments: Vec<SourceRange>,
}

impl Annotations {
    /// Returns true if nothing was found
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty() && self.comments.is_empty()
    }
}

/// Find the raw matches of a file, before resolution
///
/// Strings come first, then multi-line comments, then line comments.
pub fn scan_all(text: &str, table: &DelimiterTable) -> Vec<Match> {
    let mut matches = scan::scan_pairs(
        text,
        table.string_like_pairs(),
        MatchKind::String,
        Some(scan::ESCAPE_CHAR),
    );
    matches.extend(scan::scan_pairs(
        text,
        table.multiline_comment_delimiters(),
        MatchKind::Comment,
        None,
    ));
    matches.extend(scan::scan_line_comments(text, table.comment_delimiters()));
    matches
}

/// Find the strings and comments of a file.
///
/// # Errors
///
/// Returns [`AnnotateError::SourceMap`] if a match cannot be mapped back to
/// the file, which only happens when the file's line index does not
/// describe its content.
#[tracing::instrument(level = "debug", skip_all, fields(file = file.name()))]
pub fn annotate(file: &SourceFile, table: &DelimiterTable) -> AnnotateResult<Annotations> {
    let matches = scan_all(file.content(), table);
    let kept = resolve::resolve(&matches);
    debug!(found = matches.len(), kept = kept.len(), "resolved matches");

    let mut annotations = Annotations::default();
    for m in kept {
        let range = file.range(m.start, m.end)?;
        match m.kind {
            MatchKind::String => annotations.strings.push(range),
            MatchKind::Comment => annotations.comments.push(range),
        }
    }
    Ok(annotations)
}

/// Resolve the language and annotate a file given as lines.
///
/// Each line keeps its own line break, except possibly the last one.
///
/// # Errors
///
/// Returns [`AnnotateError::Language`] if neither `language` nor `family`
/// is registered. Nothing is scanned in that case.
pub fn annotate_lines<S: AsRef<str>>(
    filename: &str,
    lines: &[S],
    registry: &LanguageRegistry,
    language: &str,
    family: &str,
) -> AnnotateResult<Annotations> {
    let table = registry.resolve(language, family)?;
    let file = SourceFile::from_lines(filename, lines);
    annotate(&file, &table)
}
