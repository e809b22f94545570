//! Error types for the kwic-search crate.

use thiserror::Error;

/// Errors that can occur while preparing a search.
///
/// Queries are normalized rather than rejected, so the only failure is an internal one:
/// a clause whose pattern the regex engine refuses. Escaping makes this unexpected for any
/// user input, though very large synonym sets can still exceed the engine's size limit.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Failed to build the pattern for a clause.
    #[error("failed to compile pattern for clause '{clause}': {source}")]
    Pattern {
        /// Text of the clause.
        clause: String,
        /// Underlying regex error.
        source: regex::Error,
    },
}
