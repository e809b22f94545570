//! The query-to-hits pipeline behind one handle.

use kwic_expand::{EnglishInflector, Identity, Inflector, NoInflection, TermExpander};
use kwic_query::{build_clauses, tokenize};
use tracing::debug;

use crate::{
    SearchError, SearchParams,
    pattern::{CompiledClause, PatternCompiler},
    proximity,
    result::SearchResult,
};

/// Runs queries against text.
///
/// A searcher holds only immutable configuration, so one instance can serve many queries,
/// including concurrent ones against the same text.
pub struct Searcher {
    /// Synonym source consulted for every clause.
    expander: Box<dyn TermExpander>,
    /// Plural and citation-symbol variants.
    inflector: Box<dyn Inflector>,
    /// Window and hit cap.
    params: SearchParams,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchParams::default())
    }
}

impl Searcher {
    /// Creates a searcher with no synonyms and English plural handling.
    pub fn new(params: SearchParams) -> Self {
        Self {
            expander: Box::new(Identity),
            inflector: Box::new(EnglishInflector),
            params,
        }
    }

    /// Replaces the term expander.
    pub fn with_expander(mut self, expander: impl TermExpander + 'static) -> Self {
        self.expander = Box::new(expander);
        self
    }

    /// Replaces the inflector.
    pub fn with_inflector(mut self, inflector: impl Inflector + 'static) -> Self {
        self.inflector = Box::new(inflector);
        self
    }

    /// Turns plural handling on or off.
    pub fn with_plurals(self, plurals: bool) -> Self {
        if plurals {
            self.with_inflector(EnglishInflector)
        } else {
            self.with_inflector(NoInflection)
        }
    }

    /// Returns the search parameters.
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Parses a query and compiles its clauses, in query order.
    pub fn compile(&self, query: &str) -> Result<Vec<CompiledClause>, SearchError> {
        let terms = tokenize(query);
        debug!(
            terms = ?terms.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "tokenized query"
        );

        let clauses = build_clauses(&terms);
        debug!(
            clauses = ?clauses.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "built clauses"
        );

        PatternCompiler::new(&*self.expander, &*self.inflector).compile_all(&clauses)
    }

    /// Searches `text` for every place where all of the query's clauses occur together.
    ///
    /// A query with no usable terms yields an empty result.
    pub fn search<'a>(&self, query: &str, text: &'a str) -> Result<SearchResult<'a>, SearchError> {
        let clauses = self.compile(query)?;
        let result = proximity::search(&clauses, text, &self.params);
        debug!(query, hits = result.len(), "search complete");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use kwic_expand::SynonymTable;

    use super::*;

    #[test]
    fn boolean_only_query_is_empty() {
        let searcher = Searcher::default();
        assert!(searcher.compile("AND OR").unwrap().is_empty());
        assert!(searcher.search("AND OR", "AND OR").unwrap().is_empty());
    }

    #[test]
    fn compile_keeps_query_order() {
        let clauses = Searcher::default().compile("ox \"dark horse\"").unwrap();
        let texts: Vec<_> = clauses.iter().map(|c| c.clause().text.as_str()).collect();
        assert_eq!(texts, vec!["ox", "dark horse"]);
    }

    #[test]
    fn plurals_can_be_disabled() {
        let text = "two horses ran";
        assert_eq!(Searcher::default().search("horse", text).unwrap().len(), 1);

        let strict = Searcher::default().with_plurals(false);
        assert!(strict.search("horse", text).unwrap().is_empty());
    }

    #[test]
    fn synonyms_widen_matches() {
        let searcher = Searcher::default().with_expander(SynonymTable::parse("car|automobile"));
        let result = searcher.search("car red", "a red automobile").unwrap();
        assert_eq!(result.len(), 1);
        let words: Vec<_> = result.hits()[0]
            .spans()
            .iter()
            .map(|s| result.matched_text(s))
            .collect();
        assert_eq!(words, vec!["red", "automobile"]);
    }

    #[test]
    fn params_are_applied() {
        let searcher = Searcher::new(SearchParams::default().with_max_hits(1));
        assert_eq!(searcher.params().max_hits, 1);
        assert_eq!(searcher.search("a", "a. a. a.").unwrap().len(), 1);
    }
}
