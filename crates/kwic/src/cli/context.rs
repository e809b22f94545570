//! Shared context for running CLI commands.

use std::{
    env, fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};

use kwic_config::Config;
use kwic_expand::SynonymTable;
use kwic_search::{ExcerptParams, SearchParams, Searcher};
use tracing::debug;

use crate::cli::args::{ExcerptArgs, SearchParamsArgs};

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
    /// Verbosity from `-v`.
    pub verbose: u8,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load(verbose: u8) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self {
            cwd,
            config,
            verbose,
        })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used by `init`, which should work even when an existing config file is invalid.
    pub fn load_cwd_only(verbose: u8) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
            verbose,
        })
    }

    /// Builds a searcher from the configuration with CLI overrides applied.
    pub fn searcher(&self, args: &SearchParamsArgs) -> Result<Searcher, ExitCode> {
        let mut params = SearchParams::from(&self.config.search);
        if let Some(window) = args.window {
            params = params.with_match_window(window);
        }
        if let Some(max_hits) = args.max_hits {
            params = params.with_max_hits(max_hits);
        }

        let plurals = self.config.expansion.plurals && !args.no_plurals;
        let synonyms = self.synonyms(args.synonyms.as_deref())?;
        debug!(
            match_window = params.match_window,
            max_hits = params.max_hits,
            plurals,
            synonyms = synonyms.len(),
            "search settings"
        );

        Ok(Searcher::new(params)
            .with_expander(synonyms)
            .with_plurals(plurals))
    }

    /// Builds excerpt parameters from the configuration with CLI overrides applied.
    pub fn excerpt_params(&self, args: &ExcerptArgs) -> ExcerptParams {
        let mut params = ExcerptParams::from(&self.config.excerpt);
        if let Some(preceding) = args.preceding {
            params.preceding_chars = preceding;
        }
        if let Some(following) = args.following {
            params.following_chars = following;
        }
        if let Some(max_chars) = args.max_chars {
            params.max_chars = max_chars;
        }
        params
    }

    /// Collects synonym sets: inline config sets, then the configured file, then `extra`.
    ///
    /// Later sources win for members they share with earlier ones.
    fn synonyms(&self, extra: Option<&Path>) -> Result<SynonymTable, ExitCode> {
        let mut table = SynonymTable::new();
        for set in &self.config.expansion.synonyms {
            table.add_set(set);
        }

        let files = self.config.expansion.synonyms_file.as_deref().into_iter();
        for path in files.chain(extra) {
            let loaded = SynonymTable::load(path).map_err(|e| {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            })?;
            table.merge(loaded);
        }

        Ok(table)
    }
}

/// Reads a document from a path, or from standard input when the path is `-`.
pub fn read_document(path: &str) -> Result<String, ExitCode> {
    let contents = if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        fs::read_to_string(path)
    };

    contents.map_err(|e| {
        eprintln!("error: failed to read {path}: {e}");
        ExitCode::FAILURE
    })
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
