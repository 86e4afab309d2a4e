//! Marker cursor for traversing source text.
//!
//! This module provides the `Cursor` struct which keeps a byte position in
//! the source text and jumps between delimiter occurrences. It always stays
//! on UTF-8 character boundaries.

/// A cursor that searches the source text for delimiter markers.
///
/// Scanners move the cursor from one marker occurrence to the next instead
/// of stepping over every character.
///
/// # Example
///
/// ```
/// use spanscan_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("x = 'a' + 'b'");
/// assert_eq!(cursor.find("'"), Some(4));
/// cursor.seek(7);
/// assert_eq!(cursor.find("'"), Some(10));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Returns the current byte position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the remaining source from the current position.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Moves the cursor to an absolute byte position.
    ///
    /// Positions past the end clamp to the end of the source.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `position` is not a character boundary.
    pub fn seek(&mut self, position: usize) {
        let position = position.min(self.source.len());
        debug_assert!(self.source.is_char_boundary(position));
        self.position = position;
    }

    /// Advances the cursor by one character starting at `position`.
    ///
    /// Used to resume a search right after a rejected marker.
    ///
    /// # Example
    ///
    /// ```
    /// use spanscan_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("é'");
    /// cursor.step_past(0);
    /// assert_eq!(cursor.position(), 2);
    /// ```
    pub fn step_past(&mut self, position: usize) {
        let width = self.source[position..]
            .chars()
            .next()
            .map_or(0, char::len_utf8);
        self.seek(position + width.max(1));
    }

    /// Finds the next occurrence of `marker` at or after the cursor.
    ///
    /// Returns the absolute byte offset of the occurrence without moving the
    /// cursor.
    #[inline]
    pub fn find(&self, marker: &str) -> Option<usize> {
        self.remaining()
            .find(marker)
            .map(|offset| self.position + offset)
    }

    /// Counts consecutive `escape` characters ending right before `offset`.
    ///
    /// The count never reaches further back than `floor`.
    ///
    /// # Example
    ///
    /// ```
    /// use spanscan_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new(r"'a\\\'");
    /// assert_eq!(cursor.escapes_before(5, 0, '\\'), 3);
    /// assert_eq!(cursor.escapes_before(5, 3, '\\'), 2);
    /// ```
    pub fn escapes_before(&self, offset: usize, floor: usize, escape: char) -> usize {
        self.source[floor..offset]
            .chars()
            .rev()
            .take_while(|&c| c == escape)
            .count()
    }

    /// Returns true if the marker at `offset` is preceded by an odd number of
    /// escape characters, looking back no further than `floor`.
    #[inline]
    pub fn is_escaped(&self, offset: usize, floor: usize, escape: char) -> bool {
        self.escapes_before(offset, floor, escape) % 2 == 1
    }
}
