//! Delimiter scanners.
//!
//! Both scanners work on the joined text of a file and report raw,
//! possibly overlapping [`Match`]es as half-open byte spans. Overlaps are
//! settled afterwards by [`crate::resolve`].
//!
//! - [`paired`] - constructs with a start and an end marker
//! - [`line`] - line comments running to the end of their line

pub mod line;
pub mod paired;

pub use line::scan_line_comments;
pub use paired::{scan_pairs, ESCAPE_CHAR};

/// Category a match is reported under
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// Single-line or multi-line string
    String,
    /// Multi-line or line comment
    Comment,
}

/// A delimited construct found in the text
///
/// `start..end` is a half-open byte span covering the start marker through
/// the last byte of the end marker (or of the line, for line comments).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Match {
    /// Category of the construct
    pub kind: MatchKind,
    /// Byte offset of the first byte of the start marker
    pub start: usize,
    /// Byte offset one past the last byte of the construct
    pub end: usize,
}

impl Match {
    /// Create a new match
    #[inline]
    pub fn new(kind: MatchKind, start: usize, end: usize) -> Self {
        debug_assert!(start < end, "empty match {start}..{end}");
        Self { kind, start, end }
    }

    /// Returns true if both matches cover the same bytes
    #[inline]
    pub fn same_extent(&self, other: &Match) -> bool {
        self.start == other.start && self.end == other.end
    }

    /// Returns true if this match starts within `outer`
    ///
    /// That is the case when the extents differ and either both start at the
    /// same offset with this one ending first, or this one starts strictly
    /// after `outer` starts and before `outer` ends. The kind is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use spanscan_lex::scan::{Match, MatchKind};
    ///
    /// let single = Match::new(MatchKind::String, 0, 2);
    /// let triple = Match::new(MatchKind::String, 0, 9);
    /// let comment = Match::new(MatchKind::Comment, 4, 12);
    ///
    /// assert!(single.starts_within(&triple));
    /// assert!(comment.starts_within(&triple));
    /// assert!(!triple.starts_within(&comment));
    /// ```
    pub fn starts_within(&self, outer: &Match) -> bool {
        if self.same_extent(outer) {
            return false;
        }
        if self.start == outer.start {
            self.end < outer.end
        } else {
            outer.start < self.start && self.start < outer.end
        }
    }
}
