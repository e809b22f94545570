//! Parameter types for search execution and excerpt rendering.

use kwic_config::{ExcerptSettings, SearchSettings};

/// Parameters controlling the proximity scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Radius, in characters, around the anchor match within which every other clause must
    /// match.
    pub match_window: usize,
    /// Maximum hits to collect.
    pub max_hits: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self::from(&SearchSettings::default())
    }
}

impl From<&SearchSettings> for SearchParams {
    fn from(settings: &SearchSettings) -> Self {
        Self {
            match_window: settings.match_window,
            max_hits: settings.max_hits,
        }
    }
}

impl SearchParams {
    /// Sets the proximity radius.
    pub fn with_match_window(mut self, match_window: usize) -> Self {
        self.match_window = match_window;
        self
    }

    /// Sets the hit cap.
    pub fn with_max_hits(mut self, max_hits: usize) -> Self {
        self.max_hits = max_hits;
        self
    }
}

/// Parameters controlling keyword-in-context excerpts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcerptParams {
    /// Characters of context before the first span, extended to a word start.
    pub preceding_chars: usize,
    /// Characters of context after the last highlighted span, extended to a word end.
    pub following_chars: usize,
    /// Once the excerpt is longer than this, remaining spans are not highlighted.
    pub max_chars: usize,
    /// Marker inserted before each span.
    pub highlight_open: String,
    /// Marker inserted after each span.
    pub highlight_close: String,
}

impl Default for ExcerptParams {
    fn default() -> Self {
        Self::from(&ExcerptSettings::default())
    }
}

impl From<&ExcerptSettings> for ExcerptParams {
    fn from(settings: &ExcerptSettings) -> Self {
        Self {
            preceding_chars: settings.preceding_chars,
            following_chars: settings.following_chars,
            max_chars: settings.max_chars,
            highlight_open: settings.highlight_open.clone(),
            highlight_close: settings.highlight_close.clone(),
        }
    }
}

impl ExcerptParams {
    /// Sets the highlight markers.
    pub fn with_markers(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.highlight_open = open.into();
        self.highlight_close = close.into();
        self
    }
}
