//! Rendering and JSON serialization for CLI output.

mod style;

use std::{path::Path, process::ExitCode};

use kwic_search::{ExcerptParams, Hit, SearchResult};
use serde::Serialize;
pub use style::{dim, header, subheader, warning};

/// JSON output for one matched span.
#[derive(Serialize)]
struct JsonSpan<'a> {
    /// Character offset of the first matched character.
    start: usize,
    /// Character offset one past the last matched character.
    end: usize,
    /// The matched text.
    text: &'a str,
}

/// JSON output for one hit.
#[derive(Serialize)]
struct JsonHit<'a> {
    /// Matched spans in document order.
    spans: Vec<JsonSpan<'a>>,
    /// Rendered keyword-in-context excerpt.
    excerpt: String,
}

/// JSON output for a single query's results.
#[derive(Serialize)]
struct JsonQueryResults<'a> {
    /// The original query string.
    query: &'a str,
    /// Hits for this query.
    hits: Vec<JsonHit<'a>>,
    /// Total hits returned.
    total_hits: usize,
}

/// JSON output for search-like commands.
#[derive(Serialize)]
struct JsonSearchOutput<'a> {
    /// Results grouped by query.
    queries: Vec<JsonQueryResults<'a>>,
}

/// A finished query awaiting output.
pub struct QueryOutcome<'a> {
    /// The query as typed.
    pub query: &'a str,
    /// Its hits.
    pub result: SearchResult<'a>,
}

/// Converts a hit into its JSON form.
fn json_hit<'a>(result: &SearchResult<'a>, hit: &Hit, params: &ExcerptParams) -> JsonHit<'a> {
    JsonHit {
        spans: hit
            .spans()
            .iter()
            .map(|span| {
                let chars = span.char_range(result.text());
                JsonSpan {
                    start: chars.start,
                    end: chars.end,
                    text: result.matched_text(span),
                }
            })
            .collect(),
        excerpt: result.excerpt(hit, params),
    }
}

/// Prints all outcomes as one JSON document.
pub fn output_json(outcomes: &[QueryOutcome<'_>], params: &ExcerptParams) -> ExitCode {
    let output = JsonSearchOutput {
        queries: outcomes
            .iter()
            .map(|outcome| JsonQueryResults {
                query: outcome.query,
                total_hits: outcome.result.len(),
                hits: outcome
                    .result
                    .hits()
                    .iter()
                    .map(|hit| json_hit(&outcome.result, hit, params))
                    .collect(),
            })
            .collect(),
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints the excerpts of one query's hits, each preceded by a `---` separator.
pub fn output_hits(result: &SearchResult<'_>, params: &ExcerptParams) {
    if result.is_empty() {
        println!("{}", dim("No hits."));
        return;
    }

    for excerpt in result.excerpts(params) {
        println!("{}", dim("---"));
        println!("{excerpt}");
    }
}

/// Prints a query heading followed by its hits.
pub fn output_query(outcome: &QueryOutcome<'_>, params: &ExcerptParams) {
    let count = outcome.result.len();
    let noun = if count == 1 { "hit" } else { "hits" };
    println!(
        "{} {}",
        header(outcome.query),
        dim(&format!("({count} {noun})"))
    );
    output_hits(&outcome.result, params);
    println!();
}

/// Reports a freshly written config file and echoes its contents, indented.
pub fn output_config_written(path: &Path, contents: &str) {
    println!("Created {}", path.display());
    println!();
    println!("{}", subheader("Configuration written:"));
    for line in contents.lines() {
        println!("   {line}");
    }
}
