//! Term expansion for kwic.
//!
//! Before a clause becomes a pattern it is widened in two steps:
//!
//! 1. A [`TermExpander`] maps the lower-cased clause text to equivalent terms, such as the
//!    members of a [`SynonymTable`] set.
//! 2. An [`Inflector`] rewrites each *escaped* variant into a pattern fragment that also
//!    accepts inflected forms, e.g. plurals.
//!
//! The split matters: inflectors emit pattern syntax, so they must run after escaping.

#![warn(missing_docs)]

mod error;
mod inflect;
mod synonyms;

pub use error::ExpandError;
pub use inflect::{EnglishInflector, Inflector, NoInflection};
pub use synonyms::SynonymTable;

/// Maps a lower-cased term to the terms that should match in its place.
pub trait TermExpander: Send + Sync {
    /// Returns the variants of `term` in preference order.
    ///
    /// Unknown terms expand to themselves.
    fn expand(&self, term: &str) -> Vec<String>;
}

/// An expander that never adds variants.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl TermExpander for Identity {
    fn expand(&self, term: &str) -> Vec<String> {
        vec![term.to_string()]
    }
}
