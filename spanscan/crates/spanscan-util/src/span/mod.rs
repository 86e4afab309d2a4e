//! Span module - Source location tracking.
//!
//! This module provides the types used to report where a construct lives in
//! a file: a [`Position`] (character offset plus 1-based line and column) and
//! a [`SourceRange`] (an inclusive pair of positions in one named file).
//!
//! # Examples
//!
//! ```
//! use spanscan_util::span::SourceFile;
//!
//! let file = SourceFile::from_text("main.py", "x = 'hi'\n");
//! let range = file.range(4, 8).unwrap();
//! assert_eq!(range.start.column, 5);
//! assert_eq!(range.end.column, 8);
//! ```

mod source_map;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

pub use source_map::{LineIndex, SourceFile};

/// A location in a source file
///
/// `offset` is the absolute character offset into the concatenated file
/// text. `line` and `column` are 1-based and count characters.
///
/// Positions order by offset first, so sorting positions of one file sorts
/// them by location.
///
/// # Examples
///
/// ```
/// use spanscan_util::span::Position;
///
/// let pos = Position::new(12, 2, 3);
/// assert_eq!(pos.offset, 12);
/// assert_eq!(pos.to_string(), "2:3");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    /// Character offset from the start of the file
    pub offset: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Position {
    /// Create a new position
    #[inline]
    pub const fn new(offset: usize, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// An inclusive range of characters within one named file
///
/// `start` is the first character of the range and `end` the last one, so a
/// range covering a single character has `start == end`. Two ranges are equal
/// iff they name the same file and both endpoints match.
///
/// # Examples
///
/// ```
/// use spanscan_util::span::{Position, SourceRange};
///
/// let outer = SourceRange::new("f.py", Position::new(0, 1, 1), Position::new(9, 1, 10));
/// let inner = SourceRange::new("f.py", Position::new(3, 1, 4), Position::new(5, 1, 6));
/// assert!(inner.starts_within(&outer));
/// assert!(!outer.starts_within(&inner));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SourceRange {
    /// Label of the file the range belongs to
    pub file: Arc<str>,
    /// First character of the range
    pub start: Position,
    /// Last character of the range
    pub end: Position,
}

impl SourceRange {
    /// Create a new range
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `start` comes after `end`.
    pub fn new(file: impl Into<Arc<str>>, start: Position, end: Position) -> Self {
        debug_assert!(start.offset <= end.offset, "range start after end");
        Self {
            file: file.into(),
            start,
            end,
        }
    }

    /// Check whether this range starts within `outer`
    ///
    /// A range starts within another, distinct range when it opens strictly
    /// inside it, or when both open at the same character and this one is
    /// shorter. Equal ranges never start within each other.
    pub fn starts_within(&self, outer: &SourceRange) -> bool {
        if self == outer {
            return false;
        }
        if self.start.offset == outer.start.offset {
            return self.end.offset < outer.end.offset;
        }
        outer.start.offset < self.start.offset && self.start.offset <= outer.end.offset
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.file, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: usize, end: usize) -> SourceRange {
        SourceRange::new(
            "F",
            Position::new(start, 1, start as u32 + 1),
            Position::new(end, 1, end as u32 + 1),
        )
    }

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(3, 1, 4) < Position::new(7, 2, 1));
        assert_eq!(Position::default(), Position::new(0, 0, 0));
    }

    #[test]
    fn test_starts_within_inside() {
        assert!(range(3, 4).starts_within(&range(0, 10)));
        // Starting on the last character still counts
        assert!(range(10, 20).starts_within(&range(0, 10)));
        assert!(!range(11, 20).starts_within(&range(0, 10)));
    }

    #[test]
    fn test_starts_within_same_start() {
        assert!(range(0, 1).starts_within(&range(0, 8)));
        assert!(!range(0, 8).starts_within(&range(0, 1)));
    }

    #[test]
    fn test_starts_within_equal_ranges() {
        assert!(!range(0, 8).starts_within(&range(0, 8)));
    }

    #[test]
    fn test_starts_within_other_file() {
        let mut other = range(0, 8);
        other.file = Arc::from("G");
        // Same extent, different file: not equal, so the rules apply
        assert!(!range(0, 8).starts_within(&other));
        assert!(range(0, 3).starts_within(&other));
    }

    #[test]
    fn test_range_display() {
        let r = SourceRange::new("main.c", Position::new(0, 1, 1), Position::new(14, 2, 3));
        assert_eq!(r.to_string(), "main.c:1:1-2:3");
    }
}
