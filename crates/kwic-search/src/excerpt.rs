//! Keyword-in-context excerpts.

use crate::{
    ExcerptParams,
    result::Hit,
    text::{back_chars, forward_chars},
};

/// Renders the excerpt for one hit, wrapping each span in the highlight markers.
///
/// Both ends are widened to the nearest space (or the text edge) so no word is cut. Once the
/// excerpt grows past `max_chars`, the remaining spans are left out; the trailing context is
/// always appended.
pub fn excerpt(hit: &Hit, text: &str, params: &ExcerptParams) -> String {
    let Some(first) = hit.spans().first() else {
        return String::new();
    };

    let start = back_chars(text, first.start, params.preceding_chars);
    let mut cursor = text[..start].rfind(' ').map_or(0, |i| i + 1);
    let mut out = String::new();

    for span in hit.spans() {
        if span.start > cursor {
            out.push_str(&text[cursor..span.start]);
        }
        out.push_str(&params.highlight_open);
        out.push_str(&text[span.range()]);
        out.push_str(&params.highlight_close);
        cursor = span.end;

        if out.chars().count() > params.max_chars {
            break;
        }
    }

    let end = forward_chars(text, cursor, params.following_chars);
    let end = text[end..].find(' ').map_or(text.len(), |i| end + i);
    out.push_str(&text[cursor..end]);
    out
}
