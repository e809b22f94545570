//! Clause pattern compiler.
//!
//! Turns each [`Clause`] into a case-insensitive, whole-word alternation over its expanded
//! variants. A match consumes the boundary character on each side (unless it sits at the start
//! or end of the text); the `term` capture group marks the occurrence itself.

use std::ops::Range;

use kwic_expand::{Inflector, TermExpander};
use kwic_query::Clause;
use regex::{Regex, RegexBuilder};
use tracing::trace;

use crate::{SearchError, result::Span};

/// Character class of the characters that delimit a whole-word match.
pub const WORD_BOUNDARY: &str = r"[ .,:;\n\r\t()\[\]]";

/// Name of the capture group holding the occurrence without its boundaries.
const TERM_GROUP: &str = "term";

/// One occurrence of a clause pattern.
#[derive(Debug, Clone)]
pub struct ClauseMatch {
    /// The full match, boundary characters included.
    pub whole: Range<usize>,
    /// The occurrence without boundary characters.
    pub span: Span,
}

impl ClauseMatch {
    /// Gap between this (anchor) match and a candidate.
    ///
    /// Measured from the anchor's start back to the candidate's end when the candidate starts
    /// first, otherwise from the anchor's end forward to the candidate's start. Overlapping
    /// matches produce negative gaps.
    pub fn gap_to(&self, candidate: &Self) -> isize {
        let (anchor, other) = (&self.whole, &candidate.whole);
        if other.start < anchor.start {
            anchor.start as isize - other.end as isize
        } else {
            other.start as isize - anchor.end as isize
        }
    }
}

/// A clause bound to its compiled pattern.
#[derive(Debug, Clone)]
pub struct CompiledClause {
    /// The source clause.
    clause: Clause,
    /// Compiled matcher.
    regex: Regex,
}

impl CompiledClause {
    /// Returns the source clause.
    pub fn clause(&self) -> &Clause {
        &self.clause
    }

    /// Returns the pattern source.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Finds the first occurrence starting at or after `start`.
    ///
    /// Text before `start` still counts as context, so a match only begins at `start` if the
    /// character there is a boundary.
    pub(crate) fn find_at(&self, text: &str, start: usize) -> Option<ClauseMatch> {
        let caps = self.regex.captures_at(text, start)?;
        let whole = caps.get(0)?.range();
        let span = caps.name(TERM_GROUP)?.range().into();
        Some(ClauseMatch { whole, span })
    }
}

/// Compiles clauses into whole-word patterns.
pub struct PatternCompiler<'a> {
    /// Source of equivalent terms (synonyms).
    expander: &'a dyn TermExpander,
    /// Pattern-level variant generator (plurals).
    inflector: &'a dyn Inflector,
}

impl<'a> PatternCompiler<'a> {
    /// Creates a compiler over the given expansion sources.
    pub fn new(expander: &'a dyn TermExpander, inflector: &'a dyn Inflector) -> Self {
        Self {
            expander,
            inflector,
        }
    }

    /// Builds the alternation of expanded, escaped and inflected variants for a clause.
    pub fn alternation(&self, clause: &Clause) -> String {
        let variants: Vec<String> = self
            .expander
            .expand(&clause.text.to_lowercase())
            .iter()
            .filter(|v| !v.is_empty())
            // Escape first: the inflector adds pattern syntax of its own.
            .map(|v| self.inflector.inflect(&regex::escape(v)))
            .collect();

        if variants.is_empty() {
            regex::escape(&clause.text.to_lowercase())
        } else {
            variants.join("|")
        }
    }

    /// Compiles one clause.
    pub fn compile(&self, clause: &Clause) -> Result<CompiledClause, SearchError> {
        let pattern = format!(
            "(?:^|{WORD_BOUNDARY})(?P<{TERM_GROUP}>{})(?:$|{WORD_BOUNDARY})",
            self.alternation(clause)
        );
        trace!(clause = %clause, %pattern, "compiling clause");

        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()
            .map_err(|source| SearchError::Pattern {
                clause: clause.text.clone(),
                source,
            })?;

        Ok(CompiledClause {
            clause: clause.clone(),
            regex,
        })
    }

    /// Compiles every clause, preserving order.
    pub fn compile_all(&self, clauses: &[Clause]) -> Result<Vec<CompiledClause>, SearchError> {
        clauses.iter().map(|c| self.compile(c)).collect()
    }
}
