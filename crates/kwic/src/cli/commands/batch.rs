//! Implementation of `kwic batch`.

use std::{fs, process::ExitCode};

use kwic_query::tokenize;

use crate::cli::{
    args::BatchCommand,
    context::{CommandContext, read_document},
    output::{QueryOutcome, dim, output_json, output_query},
};

/// Runs every query listed in a file against one document.
pub fn run(ctx: &CommandContext, cmd: &BatchCommand) -> ExitCode {
    let queries = match fs::read_to_string(&cmd.queries) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("error: failed to read {}: {e}", cmd.queries.display());
            return ExitCode::FAILURE;
        }
    };

    let searcher = match ctx.searcher(&cmd.params) {
        Ok(s) => s,
        Err(code) => return code,
    };
    let excerpt_params = ctx.excerpt_params(&cmd.excerpt);

    let text = match read_document(&cmd.file) {
        Ok(text) => text,
        Err(code) => return code,
    };

    let mut outcomes = Vec::new();
    for query in query_lines(&queries) {
        match searcher.search(query, &text) {
            Ok(result) => outcomes.push(QueryOutcome { query, result }),
            Err(e) => {
                eprintln!("error: search failed for '{query}': {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    if cmd.output.json {
        return output_json(&outcomes, &excerpt_params);
    }

    for outcome in &outcomes {
        if ctx.verbose > 0 {
            let terms: Vec<String> = tokenize(outcome.query)
                .iter()
                .map(ToString::to_string)
                .collect();
            println!("{}", dim(&format!("terms: {}", terms.join(" | "))));
        }
        output_query(outcome, &excerpt_params);
    }

    ExitCode::SUCCESS
}

/// Returns the non-blank, non-comment lines of a query file, trimmed.
fn query_lines(contents: &str) -> impl Iterator<Item = &str> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}
