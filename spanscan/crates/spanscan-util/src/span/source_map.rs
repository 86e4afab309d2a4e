//! Source files and line tables for computing source locations.
//!
//! This module provides the [`LineIndex`] type, which converts byte offsets
//! into [`Position`]s, and the [`SourceFile`] type, which ties a file label,
//! its joined text and its line table together.

use std::sync::Arc;

use super::{Position, SourceRange};
use crate::error::{SourceMapError, SourceMapResult};

/// Precomputed line table of one file
///
/// Built once from the lines of a file. Each line keeps its own terminator,
/// so the table records where each line starts both in bytes and in
/// characters.
///
/// # Examples
///
/// ```
/// use spanscan_util::span::LineIndex;
///
/// let text = "ab\ncd";
/// let index = LineIndex::from_text(text);
/// let pos = index.position(text, 4).unwrap();
/// assert_eq!((pos.offset, pos.line, pos.column), (4, 2, 2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset where each line starts
    line_starts: Arc<[usize]>,
    /// Character offset where each line starts
    char_starts: Arc<[usize]>,
    /// Total text length in bytes
    len: usize,
}

impl LineIndex {
    /// Build the table from the lines of a file
    ///
    /// Every line except the last is expected to end with its line break.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let capacity = lines.len().max(1);
        let mut line_starts = Vec::with_capacity(capacity);
        let mut char_starts = Vec::with_capacity(capacity);
        let mut bytes = 0;
        let mut chars = 0;

        for line in lines {
            let line = line.as_ref();
            line_starts.push(bytes);
            char_starts.push(chars);
            bytes += line.len();
            chars += line.chars().count();
        }

        if line_starts.is_empty() {
            line_starts.push(0);
            char_starts.push(0);
        }

        Self {
            line_starts: line_starts.into(),
            char_starts: char_starts.into(),
            len: bytes,
        }
    }

    /// Build the table from raw text, splitting after each `\n`
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<&str> = text.split_inclusive('\n').collect();
        Self::from_lines(&lines)
    }

    /// Get the total number of lines
    ///
    /// An empty file has one (empty) line.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (0-indexed line number)
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Index of the line holding the byte at `offset`
    fn line_of(&self, offset: usize) -> usize {
        self.line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1)
    }

    /// Convert a byte offset into a position
    ///
    /// `text` must be the text the table was built from. An offset equal to
    /// the text length maps just past the last character of the last line.
    ///
    /// # Errors
    ///
    /// Fails if the offset lies past the end of the text or inside a
    /// multi-byte character.
    pub fn position(&self, text: &str, offset: usize) -> SourceMapResult<Position> {
        debug_assert_eq!(text.len(), self.len, "line table built from another text");

        if offset > self.len {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: self.len,
                span_start: offset,
                span_end: offset,
            });
        }
        if !text.is_char_boundary(offset) {
            return Err(SourceMapError::NotCharBoundary { offset });
        }

        let line = self.line_of(offset);
        let line_start = self.line_starts[line];
        let column = text[line_start..offset].chars().count();

        Ok(Position::new(
            self.char_starts[line] + column,
            (line + 1) as u32,
            (column + 1) as u32,
        ))
    }
}

/// A source file with its content and line table
///
/// # Examples
///
/// ```
/// use spanscan_util::span::SourceFile;
///
/// let file = SourceFile::from_lines("main.c", &["int x;\n", "// end"]);
/// assert_eq!(file.name(), "main.c");
/// assert_eq!(file.content(), "int x;\n// end");
/// assert_eq!(file.line_count(), 2);
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: Arc<str>,
    /// Joined file content
    content: Arc<str>,
    /// Precomputed line table
    index: LineIndex,
}

impl SourceFile {
    /// Create a source file from its lines
    ///
    /// Lines keep their terminators; the content is their concatenation.
    pub fn from_lines<S: AsRef<str>>(name: impl Into<Arc<str>>, lines: &[S]) -> Self {
        let content: String = lines.iter().map(AsRef::as_ref).collect();
        Self {
            name: name.into(),
            content: content.into(),
            index: LineIndex::from_lines(lines),
        }
    }

    /// Create a source file from raw text
    ///
    /// # Examples
    ///
    /// ```
    /// use spanscan_util::span::SourceFile;
    ///
    /// let file = SourceFile::from_text("a.py", "x\ny\n");
    /// assert_eq!(file.line_count(), 2);
    /// ```
    pub fn from_text(name: impl Into<Arc<str>>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let index = LineIndex::from_text(&content);
        Self {
            name: name.into(),
            content,
            index,
        }
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a shared handle to the file name
    #[inline]
    pub fn name_arc(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    #[inline]
    pub fn line_count(&self) -> usize {
        self.index.line_count()
    }

    /// Convert a byte offset into a position
    pub fn position(&self, offset: usize) -> SourceMapResult<Position> {
        self.index.position(&self.content, offset)
    }

    /// Convert a half-open byte span into an inclusive [`SourceRange`]
    ///
    /// The resulting range starts at the character at `start` and ends at the
    /// last character before `end`.
    ///
    /// # Errors
    ///
    /// Fails for empty or reversed spans, spans past the end of the file, and
    /// offsets inside multi-byte characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use spanscan_util::span::SourceFile;
    ///
    /// let file = SourceFile::from_text("f", "a /* é */\n");
    /// let range = file.range(2, 10).unwrap();
    /// assert_eq!(range.start.offset, 2);
    /// assert_eq!(range.end.offset, 8);
    /// assert!(file.range(4, 4).is_err());
    /// ```
    pub fn range(&self, start: usize, end: usize) -> SourceMapResult<SourceRange> {
        let text = self.extract_range(start, end)?;
        if text.is_empty() {
            return Err(SourceMapError::InvalidSpan { start, end });
        }

        // Safe: the span is non-empty, so it holds at least one character
        let last = text.char_indices().next_back().map_or(0, |(i, _)| i);

        Ok(SourceRange::new(
            self.name_arc(),
            self.position(start)?,
            self.position(start + last)?,
        ))
    }

    /// Get a specific source line (1-indexed), without its terminator
    ///
    /// # Examples
    ///
    /// ```
    /// use spanscan_util::span::SourceFile;
    ///
    /// let file = SourceFile::from_text("f", "line1\r\nline2");
    /// assert_eq!(file.line_at(1).unwrap(), "line1");
    /// assert_eq!(file.line_at(2).unwrap(), "line2");
    /// assert!(file.line_at(3).is_err());
    /// ```
    pub fn line_at(&self, line: usize) -> SourceMapResult<&str> {
        let invalid = || SourceMapError::InvalidLineNumber {
            line,
            max_lines: self.line_count(),
        };
        if line == 0 {
            return Err(invalid());
        }
        let start = self.index.line_start(line - 1).ok_or_else(invalid)?;
        let end = self
            .index
            .line_start(line)
            .unwrap_or(self.content.len());

        Ok(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Extract a substring from the file content with bounds checking
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset (inclusive)
    /// * `end` - End byte offset (exclusive)
    pub fn extract_range(&self, start: usize, end: usize) -> SourceMapResult<&str> {
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        if end > self.content.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }
        if !self.content.is_char_boundary(start) {
            return Err(SourceMapError::NotCharBoundary { offset: start });
        }
        if !self.content.is_char_boundary(end) {
            return Err(SourceMapError::NotCharBoundary { offset: end });
        }

        Ok(&self.content[start..end])
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_source_file_from_lines() {
        let file = SourceFile::from_lines("test.py", &["a = 1\n", "b = 2"]);
        assert_eq!(file.name(), "test.py");
        assert_eq!(file.content(), "a = 1\nb = 2");
        assert_eq!(file.line_count(), 2);
    }

    #[test]
    fn test_line_index_line_start() {
        let index = LineIndex::from_text("line1\nline2\nline3");
        assert_eq!(index.line_start(0), Some(0));
        assert_eq!(index.line_start(1), Some(6));
        assert_eq!(index.line_start(2), Some(12));
        assert_eq!(index.line_start(3), None);
    }

    #[test]
    fn test_position_first_line() {
        let file = SourceFile::from_text("t", "fn main() {}");
        assert_eq!(file.position(0).unwrap(), Position::new(0, 1, 1));
        assert_eq!(file.position(3).unwrap(), Position::new(3, 1, 4));
    }

    #[test]
    fn test_position_later_lines() {
        let file = SourceFile::from_lines("t", &["some #comment\n", "with 'x'"]);
        // The newline belongs to line 1
        assert_eq!(file.position(13).unwrap(), Position::new(13, 1, 14));
        assert_eq!(file.position(14).unwrap(), Position::new(14, 2, 1));
        assert_eq!(file.position(19).unwrap(), Position::new(19, 2, 6));
    }

    #[test]
    fn test_position_counts_characters() {
        // 'é' is two bytes, one character
        let file = SourceFile::from_text("t", "é'x'\nü#");
        assert_eq!(file.position(2).unwrap(), Position::new(1, 1, 2));
        assert_eq!(file.position(8).unwrap(), Position::new(6, 2, 2));
    }

    #[test]
    fn test_position_empty_lines() {
        let file = SourceFile::from_lines("t", &["a\n", "", "b"]);
        // The empty line holds no character; offset 2 is the 'b'
        assert_eq!(file.position(2).unwrap(), Position::new(2, 3, 1));
    }

    #[test]
    fn test_position_end_of_text() {
        let file = SourceFile::from_text("t", "ab");
        assert_eq!(file.position(2).unwrap(), Position::new(2, 1, 3));
    }

    #[test]
    fn test_position_out_of_bounds() {
        let file = SourceFile::from_text("t", "ab");
        assert!(matches!(
            file.position(3),
            Err(SourceMapError::SpanOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_position_not_char_boundary() {
        let file = SourceFile::from_text("t", "é");
        assert_eq!(
            file.position(1),
            Err(SourceMapError::NotCharBoundary { offset: 1 })
        );
    }

    #[test]
    fn test_range_inclusive_end() {
        let file = SourceFile::from_text("F", "'abc'\n");
        let range = file.range(0, 5).unwrap();
        assert_eq!(range.start, Position::new(0, 1, 1));
        assert_eq!(range.end, Position::new(4, 1, 5));
        assert_eq!(&*range.file, "F");
    }

    #[test]
    fn test_range_invalid() {
        let file = SourceFile::from_text("F", "abc");
        assert!(file.range(2, 2).is_err());
        assert!(file.range(2, 1).is_err());
        assert!(file.range(0, 10).is_err());
    }

    #[test]
    fn test_extract_range() {
        let file = SourceFile::from_text("t", "fn main() {}");
        assert_eq!(file.extract_range(0, 2).unwrap(), "fn");
        assert_eq!(file.extract_range(3, 7).unwrap(), "main");
    }

    #[test]
    fn test_empty_file() {
        let file = SourceFile::from_text("empty", "");
        assert_eq!(file.line_count(), 1);
        assert_eq!(file.position(0).unwrap(), Position::new(0, 1, 1));
    }

    #[quickcheck]
    fn prop_position_counts_chars_and_lines(text: String) -> bool {
        let file = SourceFile::from_text("q", text.as_str());
        text.char_indices().all(|(i, _)| {
            let prefix = &text[..i];
            let column = prefix.rsplit('\n').next().unwrap_or("").chars().count() + 1;
            match file.position(i) {
                Ok(pos) => {
                    pos.offset == prefix.chars().count()
                        && pos.line as usize == prefix.matches('\n').count() + 1
                        && pos.column as usize == column
                }
                Err(_) => false,
            }
        })
    }

    #[quickcheck]
    fn prop_lines_and_text_agree(text: String) -> bool {
        let lines: Vec<&str> = text.split_inclusive('\n').collect();
        LineIndex::from_lines(&lines) == LineIndex::from_text(&text)
    }
}
