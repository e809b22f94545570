//! Query tokenizer.
//!
//! Splits a raw query into normalized [`Term`]s. The scan is a fold over the query's
//! characters: the [`Scanner`] accumulates the current fragment and whether a quoted phrase
//! is open, and each separator finalizes the pending fragment.

use crate::term::Term;

/// Characters that delimit terms.
const SEPARATORS: [char; 6] = [' ', ',', ';', '\n', '\r', '\t'];

/// Tokenizer state threaded through the character fold.
#[derive(Debug, Default)]
struct Scanner {
    /// Raw characters of the term being read, if any.
    current: Option<String>,
    /// Whether an opening quote has been seen without its closing quote.
    in_literal: bool,
    /// Terms emitted so far.
    terms: Vec<Term>,
}

impl Scanner {
    /// Consumes one character of input.
    fn step(mut self, ch: char) -> Self {
        if SEPARATORS.contains(&ch) {
            self.close_term();
        } else {
            self.current.get_or_insert_with(String::new).push(ch);
        }
        self
    }

    /// Finalizes the pending fragment, if there is one.
    fn close_term(&mut self) {
        let Some(raw) = self.current.take() else {
            return;
        };

        let term = Term::finalize(&raw, self.in_literal);
        // Phrase state follows the term even when normalization erased its text.
        self.in_literal = term.keeps_phrase_open();
        if !term.text.is_empty() {
            self.terms.push(term);
        }
    }

    /// Flushes the trailing fragment and returns the terms.
    fn finish(mut self) -> Vec<Term> {
        self.close_term();
        self.terms
    }
}

/// Tokenizes a query string into normalized terms.
///
/// Malformed input (unbalanced quotes or parentheses, stray boolean operators) is
/// normalized rather than rejected, so this never fails.
pub fn tokenize(query: &str) -> Vec<Term> {
    query
        .chars()
        .fold(Scanner::default(), Scanner::step)
        .finish()
}
