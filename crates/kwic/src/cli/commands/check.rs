//! Implementation of `kwic check`.

use std::process::ExitCode;

use kwic_config::{ConfigWarning, discover_config_files};
use kwic_expand::SynonymTable;

use crate::cli::{
    context::CommandContext,
    output::{subheader, warning},
};

/// Exit codes for `kwic check`.
mod exit_codes {
    use std::process::ExitCode;

    /// Configuration is valid with no warnings.
    pub const OK: ExitCode = ExitCode::SUCCESS;
    /// Configuration has warnings but is usable.
    pub const WARNINGS: ExitCode = ExitCode::FAILURE;
}

/// Validates configuration and reports problems.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config_files = discover_config_files(&ctx.cwd);

    println!("Checking configuration...");
    println!();

    if config_files.is_empty() {
        println!("No configuration files found.");
        println!();
        println!("Run 'kwic init' to create a configuration file.");
        return exit_codes::OK;
    }

    println!("{}", subheader("Config files:"));
    for path in &config_files {
        println!("  {}", path.display());
    }
    println!();

    let config = &ctx.config;
    let warnings = config.validate();
    let mut synonyms_error = None;

    println!("{}", subheader("Synonyms:"));
    println!("  inline sets: {}", config.expansion.synonyms.len());
    match &config.expansion.synonyms_file {
        None => println!("  file: (none)"),
        // A missing file is reported by validation below.
        Some(path) if !path.is_file() => println!("  file: {} [missing]", path.display()),
        Some(path) => match SynonymTable::load(path) {
            Ok(table) => println!("  file: {} ({} terms)", path.display(), table.len()),
            Err(e) => {
                println!("  file: {} [unreadable]", path.display());
                synonyms_error = Some(e.to_string());
            }
        },
    }
    println!();

    if warnings.is_empty() && synonyms_error.is_none() {
        println!("No issues found.");
        return exit_codes::OK;
    }

    let count = warnings.len() + usize::from(synonyms_error.is_some());
    println!("{}", subheader(&format!("Warnings ({count}):")));
    for item in &warnings {
        println!("  - {}", warning(&item.to_string()));
    }
    if let Some(message) = &synonyms_error {
        println!("  - {}", warning(message));
    }
    println!();

    print_hints(&warnings);

    exit_codes::WARNINGS
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    let mut hints: Vec<&str> = warnings
        .iter()
        .map(|w| match w {
            ConfigWarning::SynonymsFileMissing { .. } => {
                "Create the synonyms file or fix expansion.synonyms_file (relative to its config file)."
            }
            ConfigWarning::ZeroMaxHits => "Set search.max_hits to 1 or more.",
            ConfigWarning::ZeroMatchWindow => {
                "Set search.match_window to the distance, in characters, terms may be apart."
            }
            ConfigWarning::EmptyHighlightMarker => {
                "Set excerpt.highlight_open and excerpt.highlight_close to visible markers."
            }
            ConfigWarning::TrivialSynonymSet { .. } => {
                "Remove single-member sets from expansion.synonyms; they have no effect."
            }
        })
        .collect();

    hints.sort_unstable();
    hints.dedup();

    if !hints.is_empty() {
        println!("{}", subheader("Hints:"));
        for hint in hints {
            println!("  - {hint}");
        }
    }
}
