//! Implementation of `kwic parse`.

use std::process::ExitCode;

use kwic_query::{Term, canonical_query, tokenize};
use kwic_search::anchor_order;
use serde::Serialize;

use crate::cli::{
    args::ParseCommand,
    context::CommandContext,
    output::{dim, subheader},
};

/// JSON form of one term.
#[derive(Serialize)]
struct JsonTerm<'a> {
    /// Normalized text.
    text: &'a str,
    /// Part of a quoted phrase.
    literal: bool,
    /// Opened by a double quote.
    opened_by_quote: bool,
    /// Closed by a double quote.
    closed_by_quote: bool,
}

impl<'a> From<&'a Term> for JsonTerm<'a> {
    fn from(term: &'a Term) -> Self {
        Self {
            text: &term.text,
            literal: term.is_literal,
            opened_by_quote: term.opened_by_quote,
            closed_by_quote: term.closed_by_quote,
        }
    }
}

/// JSON form of one compiled clause.
#[derive(Serialize)]
struct JsonClause<'a> {
    /// Clause text.
    text: &'a str,
    /// Whether the clause is a quoted phrase.
    literal: bool,
    /// Compiled pattern source.
    pattern: &'a str,
}

/// JSON output for `kwic parse`.
#[derive(Serialize)]
struct JsonParseOutput<'a> {
    /// The query as typed.
    query: &'a str,
    /// Canonical query that re-tokenizes to the same terms.
    canonical: String,
    /// Tokenized terms.
    terms: Vec<JsonTerm<'a>>,
    /// Clauses in anchor order.
    clauses: Vec<JsonClause<'a>>,
}

/// Prints the terms, clauses and patterns a query produces.
pub fn run(ctx: &CommandContext, cmd: &ParseCommand) -> ExitCode {
    let query = cmd.query.join(" ");

    let searcher = match ctx.searcher(&cmd.params) {
        Ok(s) => s,
        Err(code) => return code,
    };
    let compiled = match searcher.compile(&query) {
        Ok(compiled) => compiled,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let ordered = anchor_order(&compiled);
    let terms = tokenize(&query);

    if cmd.output.json {
        let output = JsonParseOutput {
            query: &query,
            canonical: canonical_query(&terms),
            terms: terms.iter().map(JsonTerm::from).collect(),
            clauses: ordered
                .iter()
                .map(|c| JsonClause {
                    text: &c.clause().text,
                    literal: c.clause().is_literal,
                    pattern: c.pattern(),
                })
                .collect(),
        };
        return match serde_json::to_string_pretty(&output) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                ExitCode::FAILURE
            }
        };
    }

    println!("{}", subheader("Terms:"));
    if terms.is_empty() {
        println!("   {}", dim("(empty query)"));
    }
    for term in &terms {
        println!("   {term}");
    }
    println!();

    if ordered.is_empty() {
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader("Clauses (anchor first):"));
    for clause in &ordered {
        println!("   {}", clause.clause());
    }
    println!();

    println!("{}", subheader("Patterns:"));
    for clause in &ordered {
        println!("   {}", clause.pattern());
    }

    ExitCode::SUCCESS
}
