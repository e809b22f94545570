//! Clap argument definitions for the `kwic` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "kwic", version)]
#[command(about = "Proximity search with keyword-in-context excerpts")]
pub struct Cli {
    /// Verbosity level (-v for debug logs and parsed terms, -vv for trace logs)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Supported `kwic` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search a document for places where all query terms occur together
    Search(SearchCommand),

    /// Run every query in a file against a document
    Batch(BatchCommand),

    /// Show how a query is tokenized, grouped into clauses and compiled
    Parse(ParseCommand),

    /// Initialize kwic configuration in the current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,

    /// Validate configuration and diagnose issues
    Check,
}

/// Flags that override the configured search and expansion settings.
#[derive(Args, Debug, Clone, Default)]
pub struct SearchParamsArgs {
    /// Proximity radius in characters around the anchor match [default: 500]
    #[arg(short = 'w', long)]
    pub window: Option<usize>,

    /// Maximum hits per query [default: 8]
    #[arg(short = 'n', long)]
    pub max_hits: Option<usize>,

    /// Match terms exactly, without plural/singular variants
    #[arg(long)]
    pub no_plurals: bool,

    /// Additional synonym file (pipe-separated sets, one per line)
    #[arg(long, value_name = "FILE")]
    pub synonyms: Option<PathBuf>,
}

/// Flags that override the configured excerpt settings.
#[derive(Args, Debug, Clone, Default)]
pub struct ExcerptArgs {
    /// Characters of context before the first match [default: 20]
    #[arg(long)]
    pub preceding: Option<usize>,

    /// Characters of context after the last highlighted match [default: 30]
    #[arg(long)]
    pub following: Option<usize>,

    /// Stop highlighting once an excerpt is this long [default: 100]
    #[arg(long)]
    pub max_chars: Option<usize>,
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `kwic search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Document to search ('-' reads standard input)
    pub file: String,

    /// Queries, each searched separately
    #[arg(required = true)]
    pub queries: Vec<String>,

    #[command(flatten)]
    /// Search parameter overrides.
    pub params: SearchParamsArgs,

    #[command(flatten)]
    /// Excerpt overrides.
    pub excerpt: ExcerptArgs,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `kwic batch`.
#[derive(Args, Debug, Clone)]
pub struct BatchCommand {
    /// Document to search ('-' reads standard input)
    pub file: String,

    /// File with one query per line (blank lines and '#' comments are skipped)
    #[arg(short = 'q', long, value_name = "FILE")]
    pub queries: PathBuf,

    #[command(flatten)]
    /// Search parameter overrides.
    pub params: SearchParamsArgs,

    #[command(flatten)]
    /// Excerpt overrides.
    pub excerpt: ExcerptArgs,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `kwic parse`.
#[derive(Args, Debug, Clone)]
pub struct ParseCommand {
    /// Query to analyze (multiple words are joined with spaces)
    #[arg(required = true)]
    pub query: Vec<String>,

    #[command(flatten)]
    /// Expansion overrides that affect the compiled patterns.
    pub params: SearchParamsArgs,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `kwic init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.kwic.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn search_flags_parse() {
        let cli = Cli::parse_from([
            "kwic", "search", "doc.txt", "alpha beta", "gamma", "-w", "40", "-n", "2",
            "--no-plurals", "--json", "-vv",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::Search(cmd) = cli.command else {
            panic!("expected search command");
        };
        assert_eq!(cmd.file, "doc.txt");
        assert_eq!(cmd.queries, vec!["alpha beta", "gamma"]);
        assert_eq!(cmd.params.window, Some(40));
        assert_eq!(cmd.params.max_hits, Some(2));
        assert!(cmd.params.no_plurals);
        assert!(cmd.output.json);
    }

    #[test]
    fn search_requires_a_query() {
        assert!(Cli::try_parse_from(["kwic", "search", "doc.txt"]).is_err());
    }
}
