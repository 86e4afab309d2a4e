//! Delimiter tables.
//!
//! A [`DelimiterTable`] records how one language quotes strings and writes
//! comments. It is built once from four collections through
//! [`DelimiterTableBuilder`], which rejects empty markers up front.

use std::fmt;
use std::hash::BuildHasherDefault;

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHasher;

use crate::error::{LanguageError, LanguageResult};

/// Ordered start marker to end marker mapping
pub type DelimiterPairs = IndexMap<String, String, BuildHasherDefault<FxHasher>>;

/// Ordered set of line-comment markers
pub type LineMarkers = IndexSet<String, BuildHasherDefault<FxHasher>>;

/// The four delimiter collections of a language
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DelimiterKind {
    /// Single-line string delimiters
    String,
    /// Multi-line string delimiters
    MultilineString,
    /// Multi-line comment delimiters
    MultilineComment,
    /// Line-comment markers
    Comment,
}

impl fmt::Display for DelimiterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::MultilineString => "multi-line string",
            Self::MultilineComment => "multi-line comment",
            Self::Comment => "comment",
        };
        f.write_str(name)
    }
}

/// Quoting and commenting conventions of one language
///
/// String and multi-line string delimiters are merged into one escape-aware
/// table when the table is built: a multi-line entry with the same start
/// marker as a string entry replaces its end marker but keeps its place in
/// the scan order.
///
/// # Examples
///
/// ```
/// use spanscan_lex::DelimiterTable;
///
/// let table = DelimiterTable::builder()
///     .quote("'")
///     .multiline_string("'''", "'''")
///     .comment("#")
///     .build()
///     .unwrap();
///
/// let starts: Vec<&str> = table.string_like_pairs().keys().map(String::as_str).collect();
/// assert_eq!(starts, ["'", "'''"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DelimiterTable {
    string_like: DelimiterPairs,
    multiline_comment_delimiters: DelimiterPairs,
    comment_delimiters: LineMarkers,
}

impl DelimiterTable {
    /// Start building a table
    pub fn builder() -> DelimiterTableBuilder {
        DelimiterTableBuilder::default()
    }

    /// Multi-line comment delimiters
    #[inline]
    pub fn multiline_comment_delimiters(&self) -> &DelimiterPairs {
        &self.multiline_comment_delimiters
    }

    /// Line-comment markers
    #[inline]
    pub fn comment_delimiters(&self) -> &LineMarkers {
        &self.comment_delimiters
    }

    /// String and multi-line string delimiters merged into one table
    #[inline]
    pub fn string_like_pairs(&self) -> &DelimiterPairs {
        &self.string_like
    }

    /// Returns true if the table defines no delimiter at all
    pub fn is_empty(&self) -> bool {
        self.string_like.is_empty()
            && self.multiline_comment_delimiters.is_empty()
            && self.comment_delimiters.is_empty()
    }
}

/// Builder for [`DelimiterTable`]
///
/// Entries keep the order in which they were added. Adding a start marker
/// twice to the same collection replaces its end marker.
#[derive(Clone, Debug, Default)]
pub struct DelimiterTableBuilder {
    strings: DelimiterPairs,
    multiline_strings: DelimiterPairs,
    multiline_comments: DelimiterPairs,
    comments: LineMarkers,
}

impl DelimiterTableBuilder {
    /// Add a single-line string delimiter pair
    pub fn string(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.strings.insert(start.into(), end.into());
        self
    }

    /// Add a single-line string delimited by the same marker on both sides
    pub fn quote(self, marker: &str) -> Self {
        self.string(marker, marker)
    }

    /// Add a multi-line string delimiter pair
    pub fn multiline_string(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.multiline_strings.insert(start.into(), end.into());
        self
    }

    /// Add a multi-line comment delimiter pair
    pub fn multiline_comment(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.multiline_comments.insert(start.into(), end.into());
        self
    }

    /// Add a line-comment marker
    pub fn comment(mut self, marker: impl Into<String>) -> Self {
        self.comments.insert(marker.into());
        self
    }

    /// Validate the collected markers and build the table
    ///
    /// # Errors
    ///
    /// Returns [`LanguageError::EmptyDelimiter`] if any start or end marker
    /// is empty.
    pub fn build(self) -> LanguageResult<DelimiterTable> {
        self.validate()?;
        Ok(self.assemble())
    }

    fn validate(&self) -> LanguageResult<()> {
        check_pairs(&self.strings, DelimiterKind::String)?;
        check_pairs(&self.multiline_strings, DelimiterKind::MultilineString)?;
        check_pairs(&self.multiline_comments, DelimiterKind::MultilineComment)?;
        if self.comments.iter().any(String::is_empty) {
            return Err(LanguageError::EmptyDelimiter {
                kind: DelimiterKind::Comment,
            });
        }
        Ok(())
    }

    /// Build a table from markers known to be non-empty
    pub(crate) fn assemble(self) -> DelimiterTable {
        debug_assert!(self.validate().is_ok(), "empty marker in trusted table");

        let mut string_like = self.strings;
        string_like.extend(self.multiline_strings);

        DelimiterTable {
            string_like,
            multiline_comment_delimiters: self.multiline_comments,
            comment_delimiters: self.comments,
        }
    }
}

fn check_pairs(pairs: &DelimiterPairs, kind: DelimiterKind) -> LanguageResult<()> {
    if pairs
        .iter()
        .any(|(start, end)| start.is_empty() || end.is_empty())
    {
        return Err(LanguageError::EmptyDelimiter { kind });
    }
    Ok(())
}
