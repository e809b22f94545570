//! Search result types.

use std::{fmt, ops::Range};

use serde::Serialize;

use crate::{excerpt::excerpt, params::ExcerptParams};

/// One matched occurrence, without the boundary characters the pattern consumed.
///
/// Offsets are byte offsets into the searched text and always fall on character boundaries,
/// so spans slice the text directly. Use [`Span::char_range`] for character positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Offset of the first matched byte.
    pub start: usize,
    /// Offset one past the last matched byte.
    pub end: usize,
}

impl Span {
    /// Creates a span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the span as a byte range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the span as character offsets into `text`, the text it was matched in.
    pub fn char_range(&self, text: &str) -> Range<usize> {
        let start = text[..self.start].chars().count();
        start..start + text[self.range()].chars().count()
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// One proximity match: a span for every clause, ordered by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hit {
    /// Spans sorted by start offset.
    spans: Vec<Span>,
}

impl Hit {
    /// Creates a hit, sorting the spans by start offset.
    pub fn new(mut spans: Vec<Span>) -> Self {
        spans.sort_by_key(|s| s.start);
        Self { spans }
    }

    /// Returns the spans in document order.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Returns the offset one past the furthest span end.
    pub fn end(&self) -> usize {
        self.spans.iter().map(|s| s.end).max().unwrap_or(0)
    }
}

/// Hits for one query, borrowing the searched text.
#[derive(Debug, Clone)]
pub struct SearchResult<'a> {
    /// The text that was searched.
    text: &'a str,
    /// Hits in discovery order.
    hits: Vec<Hit>,
}

impl<'a> SearchResult<'a> {
    /// Creates a result from collected hits.
    pub fn new(text: &'a str, hits: Vec<Hit>) -> Self {
        Self { text, hits }
    }

    /// Creates a result with no hits.
    pub fn empty(text: &'a str) -> Self {
        Self::new(text, Vec::new())
    }

    /// Returns the hits in document order.
    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    /// Returns the searched text.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Returns the number of hits.
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Returns true if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Returns the text covered by a span.
    pub fn matched_text(&self, span: &Span) -> &'a str {
        &self.text[span.range()]
    }

    /// Renders the keyword-in-context excerpt for one hit.
    pub fn excerpt(&self, hit: &Hit, params: &ExcerptParams) -> String {
        excerpt(hit, self.text, params)
    }

    /// Renders excerpts for all hits.
    pub fn excerpts(&self, params: &ExcerptParams) -> Vec<String> {
        self.hits
            .iter()
            .map(|hit| self.excerpt(hit, params))
            .collect()
    }
}

impl fmt::Display for SearchResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = ExcerptParams::default();
        for hit in &self.hits {
            write!(f, "\n---\n{}", self.excerpt(hit, &params))?;
        }
        Ok(())
    }
}
