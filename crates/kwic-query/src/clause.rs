//! AND-clause construction.
//!
//! Every clause is one operand of the implicit AND: a single term, or a literal phrase made
//! of consecutive literal terms.

use std::fmt;

use crate::term::Term;

/// One operand of the query's implicit AND.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// The clause text; literal phrases are joined by single spaces.
    pub text: String,
    /// Whether the clause came from quoted input.
    pub is_literal: bool,
}

impl Clause {
    /// Creates a single-word clause.
    pub fn word(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_literal: false,
        }
    }

    /// Creates a literal phrase clause.
    pub fn phrase(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_literal: true,
        }
    }

    /// Length of the clause text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_literal {
            write!(f, "\"{}\"", self.text)
        } else {
            write!(f, "{}", self.text)
        }
    }
}

/// Groups terms into AND-clauses, preserving query order.
pub fn build_clauses(terms: &[Term]) -> Vec<Clause> {
    let mut clauses = Vec::new();
    let mut phrase: Vec<&str> = Vec::new();

    for term in terms {
        if term.is_literal {
            phrase.push(&term.text);
            continue;
        }
        flush_phrase(&mut phrase, &mut clauses);
        clauses.push(Clause::word(term.text.as_str()));
    }
    flush_phrase(&mut phrase, &mut clauses);

    clauses
}

/// Emits the accumulated literal words as one phrase clause.
fn flush_phrase(phrase: &mut Vec<&str>, clauses: &mut Vec<Clause>) {
    if !phrase.is_empty() {
        clauses.push(Clause::phrase(phrase.join(" ")));
        phrase.clear();
    }
}
