//! Paired-delimiter scanning.
//!
//! Every start/end pair is scanned over the whole text on its own, and the
//! results of all pairs are concatenated in table order. Matches of one pair
//! never overlap each other; matches of different pairs may.

use tracing::trace;

use super::{Match, MatchKind};
use crate::cursor::Cursor;
use crate::delimiters::DelimiterPairs;

/// Escape character honoured by escape-aware scans
pub const ESCAPE_CHAR: char = '\\';

/// Find every `start ... end` construct for each pair in `pairs`.
///
/// With an `escape` character, a start marker preceded by an odd number of
/// escapes is not an opener, and an end marker preceded by an odd number of
/// escapes inside the construct does not close it. Without one, the first
/// end marker after the opener closes it.
///
/// A start marker with no closing marker after it yields nothing and the
/// scan resumes one character after it.
///
/// # Examples
///
/// ```
/// use spanscan_lex::scan::{scan_pairs, MatchKind, ESCAPE_CHAR};
/// use spanscan_lex::DelimiterTable;
///
/// let table = DelimiterTable::builder().quote("'").build().unwrap();
/// let found = scan_pairs(
///     r"x = 'it\'s' + 'ok'",
///     table.string_like_pairs(),
///     MatchKind::String,
///     Some(ESCAPE_CHAR),
/// );
///
/// let spans: Vec<_> = found.iter().map(|m| (m.start, m.end)).collect();
/// assert_eq!(spans, [(4, 11), (14, 18)]);
/// ```
pub fn scan_pairs(
    text: &str,
    pairs: &DelimiterPairs,
    kind: MatchKind,
    escape: Option<char>,
) -> Vec<Match> {
    let mut found = Vec::new();
    for (open, close) in pairs {
        scan_pair(text, open, close, kind, escape, &mut found);
    }
    found
}

fn scan_pair(
    text: &str,
    open: &str,
    close: &str,
    kind: MatchKind,
    escape: Option<char>,
    found: &mut Vec<Match>,
) {
    let mut cursor = Cursor::new(text);

    while let Some(start) = cursor.find(open) {
        if escape.is_some_and(|esc| cursor.is_escaped(start, 0, esc)) {
            cursor.step_past(start);
            continue;
        }

        let body = start + open.len();
        match find_close(text, body, close, escape) {
            Some(close_at) => {
                let end = close_at + close.len();
                found.push(Match::new(kind, start, end));
                cursor.seek(end);
            },
            None => {
                trace!(start, marker = open, "unterminated construct");
                cursor.step_past(start);
            },
        }
    }
}

/// Offset of the first end marker at or after `body` that is not escaped
fn find_close(text: &str, body: usize, close: &str, escape: Option<char>) -> Option<usize> {
    let mut cursor = Cursor::new(text);
    cursor.seek(body);

    loop {
        let at = cursor.find(close)?;
        match escape {
            Some(esc) if cursor.is_escaped(at, body, esc) => cursor.step_past(at),
            _ => return Some(at),
        }
    }
}
