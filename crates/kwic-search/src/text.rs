//! Character-aware offset helpers.
//!
//! Spans are byte offsets into UTF-8 text, while window and margin sizes are counted in
//! characters. These helpers convert between the two without ever landing inside a
//! multi-byte character.

/// Returns the offset `n` characters before `pos`, or 0.
pub fn back_chars(text: &str, pos: usize, n: usize) -> usize {
    if n == 0 {
        return pos;
    }
    text[..pos]
        .char_indices()
        .rev()
        .nth(n - 1)
        .map_or(0, |(i, _)| i)
}

/// Returns the offset `n` characters after `pos`, or the end of the text.
pub fn forward_chars(text: &str, pos: usize, n: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(n)
        .map_or(text.len(), |(i, _)| pos + i)
}

/// Rounds `pos` up to the nearest character boundary, capped at the end of the text.
pub fn ceil_char_boundary(text: &str, pos: usize) -> usize {
    let mut pos = pos.min(text.len());
    while !text.is_char_boundary(pos) {
        pos += 1;
    }
    pos
}
