//! Proximity search with keyword-in-context excerpts.
//!
//! Given a query and a block of text, finds every place where all query clauses occur within a
//! bounded character distance of each other and renders each place as a short excerpt with the
//! matched words highlighted.
//!
//! The pipeline:
//!
//! 1. **Parse**: the query becomes AND-clauses (see [`kwic_query`]).
//! 2. **Compile**: each clause becomes a case-insensitive whole-word alternation over its
//!    synonyms and plural forms. See [`PatternCompiler`].
//! 3. **Match**: the longest clause anchors each window; every other clause must occur within
//!    `match_window` characters, and the closest occurrence wins. See [`search()`].
//! 4. **Excerpt**: each hit is rendered with word-aligned margins. See [`excerpt()`].
//!
//! # Example
//!
//! ```
//! use kwic_search::{ExcerptParams, Searcher};
//!
//! let searcher = Searcher::default();
//! let result = searcher.search("alpha beta", "The alpha beta method works.").unwrap();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(
//!     result.excerpts(&ExcerptParams::default()),
//!     vec!["The <<alpha>> <<beta>> method works."]
//! );
//! ```

#![warn(missing_docs)]

mod error;
mod excerpt;
mod params;
mod pattern;
mod proximity;
mod result;
mod searcher;
mod text;

pub use error::SearchError;
pub use excerpt::excerpt;
pub use params::{ExcerptParams, SearchParams};
pub use pattern::{CompiledClause, PatternCompiler, WORD_BOUNDARY};
pub use proximity::{anchor_order, search};
pub use result::{Hit, SearchResult, Span};
pub use searcher::Searcher;
