//! Overlap resolution.
//!
//! Raw matches from all scanners are reconciled in a single pass over the
//! combined list. A match is dropped when it starts within any other match
//! of the list (see [`Match::starts_within`]); every other match survives,
//! in its original position.
//!
//! Matches are visited in start order, grouped by start offset. For each
//! group two numbers decide everything:
//!
//! - `reach`: the largest end among matches starting strictly earlier. A
//!   match starting before `reach` lies inside one of them.
//! - the largest end within the group. A shorter match of the group shares
//!   its start with a longer one.
//!
//! Matches with identical extents never drop each other, whatever their kind.

use tracing::trace;

use crate::scan::Match;

/// Mark every match that does not start within another one.
///
/// The returned mask is parallel to `matches`.
pub fn survivors(matches: &[Match]) -> Vec<bool> {
    let mut order: Vec<usize> = (0..matches.len()).collect();
    order.sort_by_key(|&i| matches[i].start);

    let mut keep = vec![true; matches.len()];
    let mut reach = 0;

    for group in order.chunk_by(|&a, &b| matches[a].start == matches[b].start) {
        let start = matches[group[0]].start;
        let longest = group.iter().map(|&i| matches[i].end).max().unwrap_or(start);

        for &i in group {
            let m = &matches[i];
            if reach > start || m.end < longest {
                trace!(start = m.start, end = m.end, kind = ?m.kind, "dropped nested match");
                keep[i] = false;
            }
        }

        reach = reach.max(longest);
    }

    keep
}

/// Drop every match that starts within another one, keeping the order of
/// the survivors.
///
/// # Examples
///
/// ```
/// use spanscan_lex::resolve::resolve;
/// use spanscan_lex::scan::{Match, MatchKind};
///
/// let matches = [
///     Match::new(MatchKind::String, 0, 2),   // '' of '''..'''
///     Match::new(MatchKind::String, 0, 12),  // '''..'''
///     Match::new(MatchKind::Comment, 5, 9),  // # inside the string
///     Match::new(MatchKind::Comment, 14, 20),
/// ];
///
/// let kept = resolve(&matches);
/// assert_eq!(kept, [matches[1], matches[3]]);
/// ```
pub fn resolve(matches: &[Match]) -> Vec<Match> {
    matches
        .iter()
        .zip(survivors(matches))
        .filter_map(|(m, keep)| keep.then_some(*m))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::MatchKind;

    fn s(start: usize, end: usize) -> Match {
        Match::new(MatchKind::String, start, end)
    }

    fn c(start: usize, end: usize) -> Match {
        Match::new(MatchKind::Comment, start, end)
    }

    /// Quadratic reference straight from the nesting predicate
    fn naive(matches: &[Match]) -> Vec<Match> {
        matches
            .iter()
            .filter(|a| !matches.iter().any(|b| a.starts_within(b)))
            .copied()
            .collect()
    }

    #[test]
    fn test_empty() {
        assert!(resolve(&[]).is_empty());
    }

    #[test]
    fn test_disjoint_matches_survive_in_order() {
        let matches = [c(10, 12), s(0, 3), s(4, 7)];
        assert_eq!(resolve(&matches), matches);
    }

    #[test]
    fn test_comment_inside_string_dropped() {
        let matches = [s(0, 40), c(27, 40)];
        assert_eq!(resolve(&matches), [s(0, 40)]);
    }

    #[test]
    fn test_string_inside_comment_dropped() {
        let matches = [s(19, 27), c(5, 27)];
        assert_eq!(resolve(&matches), [c(5, 27)]);
    }

    #[test]
    fn test_shorter_same_start_dropped() {
        let matches = [s(0, 2), s(2, 6), s(6, 8), s(0, 8)];
        assert_eq!(resolve(&matches), [s(0, 8)]);
    }

    #[test]
    fn test_identical_extents_both_survive() {
        let matches = [s(3, 9), c(3, 9)];
        assert_eq!(resolve(&matches), matches);
    }

    #[test]
    fn test_identical_extents_inside_other_dropped() {
        let matches = [s(0, 20), c(3, 9), c(3, 9)];
        assert_eq!(resolve(&matches), [s(0, 20)]);
    }

    #[test]
    fn test_dropped_match_still_encloses() {
        // b starts in a and is dropped, c starts in b only and is dropped too
        let matches = [s(0, 5), s(3, 12), c(8, 10)];
        assert_eq!(resolve(&matches), [s(0, 5)]);
        assert_eq!(resolve(&matches), naive(&matches));
    }

    #[test]
    fn test_adjacent_matches_survive() {
        let matches = [s(0, 5), s(5, 9)];
        assert_eq!(resolve(&matches), matches);
    }

    #[test]
    fn test_mask_is_parallel() {
        let matches = [s(2, 4), s(0, 10), c(12, 14)];
        assert_eq!(survivors(&matches), [false, true, true]);
    }

    #[test]
    fn test_matches_naive_reference() {
        let matches = [
            s(0, 3),
            s(0, 7),
            c(1, 2),
            c(7, 9),
            s(8, 15),
            s(8, 15),
            c(9, 11),
            s(20, 22),
            c(21, 30),
            s(30, 31),
        ];
        assert_eq!(resolve(&matches), naive(&matches));
    }
}
