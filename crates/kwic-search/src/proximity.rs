//! Proximity matching.
//!
//! The longest clause seeds each window (the anchor). Every other clause must then match
//! within `match_window` characters of the anchor; the closest occurrence of each is kept.

use std::{cmp::Reverse, ops::Range};

use tracing::{debug, trace};

use crate::{
    SearchParams,
    pattern::{ClauseMatch, CompiledClause},
    result::{Hit, SearchResult},
    text::{back_chars, ceil_char_boundary, forward_chars},
};

/// Orders clauses longest first, keeping query order among equal lengths.
///
/// The first clause anchors every window. Longer clauses are usually rarer, so they make
/// cheaper anchors.
pub fn anchor_order(clauses: &[CompiledClause]) -> Vec<&CompiledClause> {
    let mut ordered: Vec<&CompiledClause> = clauses.iter().collect();
    ordered.sort_by_key(|c| Reverse(c.clause().char_len()));
    ordered
}

/// Scans `text` for windows in which every clause occurs.
///
/// Scanning stops at the first anchor whose window cannot satisfy all clauses, when the anchor
/// clause has no further matches, or once `max_hits` hits are collected.
pub fn search<'a>(
    clauses: &[CompiledClause],
    text: &'a str,
    params: &SearchParams,
) -> SearchResult<'a> {
    let ordered = anchor_order(clauses);
    let Some((anchor_clause, others)) = ordered.split_first() else {
        return SearchResult::empty(text);
    };

    let mut hits = Vec::new();
    let mut cursor = 0;

    while cursor < text.len() && hits.len() < params.max_hits {
        let Some(anchor) = anchor_clause.find_at(text, cursor) else {
            break;
        };
        trace!(start = anchor.span.start, end = anchor.span.end, "anchor");

        let window = back_chars(text, anchor.whole.start, params.match_window).max(cursor)
            ..forward_chars(text, anchor.whole.end, params.match_window);

        let mut spans = vec![anchor.span];
        for clause in others {
            match closest_in_window(clause, text, &anchor, &window) {
                Some(found) => spans.push(found.span),
                None => {
                    debug!(
                        clause = %clause.clause(),
                        window_start = window.start,
                        window_end = window.end,
                        "clause missing from window, ending scan"
                    );
                    return SearchResult::new(text, hits);
                }
            }
        }

        let hit = Hit::new(spans);
        cursor = ceil_char_boundary(text, hit.end() + 1);
        hits.push(hit);
    }

    SearchResult::new(text, hits)
}

/// Returns the occurrence of `clause` inside `window` closest to the anchor.
///
/// The haystack is cut at the window end, so a long variant running past the edge cannot
/// hide a shorter one inside it. Ties go to the earliest occurrence.
fn closest_in_window(
    clause: &CompiledClause,
    text: &str,
    anchor: &ClauseMatch,
    window: &Range<usize>,
) -> Option<ClauseMatch> {
    let haystack = &text[..window.end];
    let mut best: Option<(isize, ClauseMatch)> = None;
    let mut pos = window.start;

    while pos < haystack.len() {
        let Some(candidate) = clause.find_at(haystack, pos) else {
            break;
        };
        pos = candidate.span.end;

        let gap = anchor.gap_to(&candidate);
        if best.as_ref().is_none_or(|(closest, _)| gap < *closest) {
            best = Some((gap, candidate));
        }
    }

    best.map(|(_, found)| found)
}
