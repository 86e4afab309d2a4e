//! Line-comment scanning.

use super::{Match, MatchKind};
use crate::cursor::Cursor;
use crate::delimiters::LineMarkers;

/// Find every occurrence of each line-comment marker.
///
/// Each match runs from the marker to the last character of its line,
/// excluding the line break (`\n` or `\r\n`). On a final line without a
/// break it runs to the end of the text. Markers are searched literally and
/// independently; results come marker by marker, each in text order.
///
/// # Examples
///
/// ```
/// use spanscan_lex::scan::scan_line_comments;
/// use spanscan_lex::DelimiterTable;
///
/// let table = DelimiterTable::builder().comment("#").build().unwrap();
/// let found = scan_line_comments("a # one\nb # two", table.comment_delimiters());
///
/// let spans: Vec<_> = found.iter().map(|m| (m.start, m.end)).collect();
/// assert_eq!(spans, [(2, 7), (10, 15)]);
/// ```
pub fn scan_line_comments(text: &str, markers: &LineMarkers) -> Vec<Match> {
    let mut found = Vec::new();

    for marker in markers {
        let mut cursor = Cursor::new(text);
        while let Some(start) = cursor.find(marker) {
            cursor.seek(start + marker.len());
            let end = match cursor.find("\n") {
                Some(newline) if text[..newline].ends_with('\r') => newline - 1,
                Some(newline) => newline,
                None => text.len(),
            };
            // A marker right before the line break still covers itself
            found.push(Match::new(MatchKind::Comment, start, end.max(cursor.position())));
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DelimiterTable;

    fn scan(text: &str, markers: &[&str]) -> Vec<(usize, usize)> {
        let table = markers
            .iter()
            .fold(DelimiterTable::builder(), |builder, marker| builder.comment(*marker))
            .build()
            .unwrap();
        scan_line_comments(text, table.comment_delimiters())
            .iter()
            .map(|m| (m.start, m.end))
            .collect()
    }

    #[test]
    fn test_comment_stops_before_newline() {
        assert_eq!(scan("x # c\ny", &["#"]), [(2, 5)]);
    }

    #[test]
    fn test_comment_without_trailing_newline() {
        assert_eq!(scan("x # c", &["#"]), [(2, 5)]);
    }

    #[test]
    fn test_crlf_line_end() {
        assert_eq!(scan("x # c\r\ny", &["#"]), [(2, 5)]);
    }

    #[test]
    fn test_marker_alone_on_line() {
        assert_eq!(scan("#\n#", &["#"]), [(0, 1), (2, 3)]);
    }

    #[test]
    fn test_every_occurrence_is_reported() {
        // Nested markers on the same line are resolved later
        assert_eq!(scan("# a # b\n", &["#"]), [(0, 7), (4, 7)]);
    }

    #[test]
    fn test_marker_then_position_order() {
        assert_eq!(
            scan("// a\n# b\n// c", &["//", "#"]),
            [(0, 4), (9, 13), (5, 8)]
        );
    }

    #[test]
    fn test_no_markers() {
        assert!(scan("# a", &[]).is_empty());
    }
}
