//! Query tokenizing and clause building for kwic.
//!
//! A kwic query is a flat list of AND-operands:
//!
//! - **Terms**: `horse` - words that must appear near each other
//! - **Phrases**: `"dark horse"` - exact word sequences
//! - **Codes**: `168(a)`, `(a)(2)` - parenthesized references kept whole
//!
//! Boolean keywords (`AND`, `OR`) are ignored since every operand is required anyway.
//!
//! # Example
//!
//! ```
//! use kwic_query::parse;
//!
//! let clauses = parse("\"dark horse\" AND racing");
//! assert_eq!(clauses.len(), 2);
//! assert_eq!(clauses[0].text, "dark horse");
//! ```

#![warn(missing_docs)]

mod clause;
mod term;
mod tokenizer;

pub use clause::{Clause, build_clauses};
pub use term::{Term, canonical_query};
pub use tokenizer::tokenize;

/// Tokenizes a query and groups its terms into AND-clauses.
pub fn parse(query: &str) -> Vec<Clause> {
    build_clauses(&tokenize(query))
}
