//! Implementation of `kwic search`.

use std::process::ExitCode;

use crate::cli::{
    args::SearchCommand,
    context::{CommandContext, read_document},
    output::{QueryOutcome, output_hits, output_json, output_query},
};

/// Runs each query against the document and prints the hits.
pub fn run(ctx: &CommandContext, cmd: &SearchCommand) -> ExitCode {
    let searcher = match ctx.searcher(&cmd.params) {
        Ok(s) => s,
        Err(code) => return code,
    };
    let excerpt_params = ctx.excerpt_params(&cmd.excerpt);

    let text = match read_document(&cmd.file) {
        Ok(text) => text,
        Err(code) => return code,
    };

    let mut outcomes = Vec::with_capacity(cmd.queries.len());
    for query in &cmd.queries {
        match searcher.search(query, &text) {
            Ok(result) => outcomes.push(QueryOutcome { query, result }),
            Err(e) => {
                eprintln!("error: search failed: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    if cmd.output.json {
        return output_json(&outcomes, &excerpt_params);
    }

    // A lone query needs no heading.
    if let [outcome] = outcomes.as_slice() {
        output_hits(&outcome.result, &excerpt_params);
    } else {
        for outcome in &outcomes {
            output_query(outcome, &excerpt_params);
        }
    }

    ExitCode::SUCCESS
}
