//! Normalized query terms.
//!
//! A [`Term`] is one whitespace-delimited fragment of a query after punctuation trimming.
//! Terms that came from inside double quotes are marked literal so the clause builder can
//! stitch them back into phrases.

use std::fmt;

/// Characters stripped from either end of a non-literal term.
const EDGE_PUNCTUATION: [char; 3] = ['\'', '.', ':'];

/// A single normalized fragment of a query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Term {
    /// The normalized text. Never empty once the term is emitted by the tokenizer.
    pub text: String,
    /// Whether the term is part of a quoted literal phrase.
    pub is_literal: bool,
    /// Whether a double quote opened this term.
    pub opened_by_quote: bool,
    /// Whether a double quote closed this term.
    pub closed_by_quote: bool,
}

impl Term {
    /// Creates a plain (non-literal) term.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Creates a literal term with no quote markers.
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_literal: true,
            ..Self::default()
        }
    }

    /// Normalizes a raw, delimited fragment.
    ///
    /// `in_literal` is true when an earlier term opened a quoted phrase that has not been
    /// closed yet; such fragments are kept verbatim apart from a closing quote.
    pub(crate) fn finalize(raw: &str, in_literal: bool) -> Self {
        if in_literal {
            return Self::continue_phrase(raw);
        }

        let mut term = Self::default();
        let mut text = raw;

        // Front of the word.
        while let Some(first) = text.chars().next() {
            match first {
                // Parenthesized codes such as (a)(2) are kept whole.
                '(' if text.ends_with(')') => break,
                '(' => text = &text[1..],
                '"' if text.ends_with('"') => {
                    text = text
                        .strip_prefix('"')
                        .and_then(|t| t.strip_suffix('"'))
                        .unwrap_or("");
                    term.is_literal = true;
                    term.opened_by_quote = true;
                    term.closed_by_quote = true;
                    break;
                }
                '"' => {
                    text = &text[1..];
                    term.is_literal = true;
                    term.opened_by_quote = true;
                    break;
                }
                c if EDGE_PUNCTUATION.contains(&c) => text = &text[1..],
                _ => break,
            }
        }

        // Back of the word. Literal terms keep whatever follows the opening quote.
        if !term.is_literal {
            while let Some(last) = text.chars().next_back() {
                match last {
                    // 168(a) keeps its closing paren.
                    ')' if text.contains('(') => break,
                    ')' | '"' => text = &text[..text.len() - 1],
                    c if EDGE_PUNCTUATION.contains(&c) => text = &text[..text.len() - 1],
                    _ => break,
                }
            }
        }

        // The engine is AND-only, so explicit boolean operators are dropped.
        if text == "AND" || text == "OR" {
            text = "";
        }

        term.text = text.to_string();
        term
    }

    /// Finalizes a fragment that sits inside an open quoted phrase.
    fn continue_phrase(raw: &str) -> Self {
        let (text, closed) = match raw.strip_suffix('"') {
            Some(text) => (text, true),
            None => (raw, false),
        };
        Self {
            text: text.to_string(),
            is_literal: true,
            opened_by_quote: false,
            closed_by_quote: closed,
        }
    }

    /// Returns true if this term leaves a quoted phrase open for the terms after it.
    pub(crate) fn keeps_phrase_open(&self) -> bool {
        self.is_literal && !self.closed_by_quote
    }

    /// Renders the term the way it would be typed, quotes included.
    pub fn to_query_fragment(&self) -> String {
        let open = if self.opened_by_quote { "\"" } else { "" };
        let close = if self.closed_by_quote { "\"" } else { "" };
        format!("{open}{}{close}", self.text)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_literal {
            write!(f, "<LITERAL>")?;
        }
        if self.opened_by_quote {
            write!(f, "[\"]")?;
        }
        write!(f, "{}", self.text)?;
        if self.closed_by_quote {
            write!(f, "[\"]")?;
        }
        Ok(())
    }
}

/// Renders a term sequence as a query string that tokenizes back to the same sequence.
pub fn canonical_query(terms: &[Term]) -> String {
    terms
        .iter()
        .map(Term::to_query_fragment)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_paren_stripped_without_closing_paren() {
        assert_eq!(Term::finalize("(foo", false).text, "foo");
    }

    #[test]
    fn wrapped_parens_kept() {
        assert_eq!(Term::finalize("(a)(2)", false).text, "(a)(2)");
    }

    #[test]
    fn trailing_paren_kept_with_inner_open() {
        assert_eq!(Term::finalize("168(a)", false).text, "168(a)");
    }

    #[test]
    fn trailing_paren_stripped_alone() {
        assert_eq!(Term::finalize("foo)", false).text, "foo");
    }

    #[test]
    fn edge_punctuation_stripped() {
        assert_eq!(Term::finalize("'.:word.:'", false).text, "word");
        assert_eq!(Term::finalize("end.", false).text, "end");
    }

    #[test]
    fn quoted_single_word_is_literal() {
        let term = Term::finalize("\"sec.(192)\"", false);
        assert_eq!(term.text, "sec.(192)");
        assert!(term.is_literal);
        assert!(term.opened_by_quote);
        assert!(term.closed_by_quote);
    }

    #[test]
    fn opening_quote_stops_trimming() {
        let term = Term::finalize("\"hello.", false);
        assert_eq!(term.text, "hello.");
        assert!(term.is_literal);
        assert!(term.keeps_phrase_open());
    }

    #[test]
    fn lone_quote_is_empty() {
        let term = Term::finalize("\"", false);
        assert!(term.text.is_empty());
        assert!(!term.keeps_phrase_open());
    }

    #[test]
    fn boolean_operators_erased() {
        assert!(Term::finalize("AND", false).text.is_empty());
        assert!(Term::finalize("OR", false).text.is_empty());
        assert!(Term::finalize("(OR", false).text.is_empty());
        assert_eq!(Term::finalize("and", false).text, "and");
        assert_eq!(Term::finalize("Or", false).text, "Or");
    }

    #[test]
    fn phrase_continuation_closes_on_quote() {
        let middle = Term::finalize("b.", true);
        assert_eq!(middle.text, "b.");
        assert!(middle.keeps_phrase_open());

        let last = Term::finalize("c\"", true);
        assert_eq!(last.text, "c");
        assert!(last.is_literal);
        assert!(!last.keeps_phrase_open());
    }

    #[test]
    fn phrase_continuation_keeps_boolean_words() {
        assert_eq!(Term::finalize("AND", true).text, "AND");
    }

    #[test]
    fn display_marks_literal_and_quotes() {
        let term = Term::finalize("\"sec\"", false);
        assert_eq!(term.to_string(), "<LITERAL>[\"]sec[\"]");
        assert_eq!(Term::plain("rust").to_string(), "rust");
    }

    #[test]
    fn query_fragment_restores_quotes() {
        let term = Term::finalize("\"open", false);
        assert_eq!(term.to_query_fragment(), "\"open");
    }
}
