//! Configuration system for kwic.
//!
//! kwic uses TOML configuration files named `.kwic.toml`. Configuration is resolved by walking
//! up the directory tree from the current working directory, collecting any `.kwic.toml` files
//! found, then loading `~/.kwic.toml` as the global config with lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawExcerptSettings, RawExpansionSettings, RawSearchSettings, parse_config_file,
    parse_config_str,
};
pub use resolve::resolve_config_path;
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Default proximity radius, in characters, around an anchor match.
pub const DEFAULT_MATCH_WINDOW: usize = 500;

/// Default cap on hits per query.
pub const DEFAULT_MAX_HITS: usize = 8;

/// Default characters of context shown before the first match.
pub const DEFAULT_PRECEDING_CHARS: usize = 20;

/// Default characters of context shown after the last match.
pub const DEFAULT_FOLLOWING_CHARS: usize = 30;

/// Default soft cap on excerpt length.
pub const DEFAULT_MAX_EXCERPT_CHARS: usize = 100;

/// Top-level merged configuration for kwic.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Proximity search settings.
    pub search: SearchSettings,
    /// Excerpt rendering settings.
    pub excerpt: ExcerptSettings,
    /// Term expansion settings.
    pub expansion: ExpansionSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.kwic.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableSettings {
            search: &self.search,
            excerpt: &self.excerpt,
            expansion: &self.expansion,
        };
        toml::to_string_pretty(&serializable).expect("settings serialization should not fail")
    }
}

/// Proximity search settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSettings {
    /// How far, in characters, other clauses may sit from the anchor match.
    pub match_window: usize,
    /// Maximum hits returned per query.
    pub max_hits: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            match_window: DEFAULT_MATCH_WINDOW,
            max_hits: DEFAULT_MAX_HITS,
        }
    }
}

/// Keyword-in-context excerpt settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExcerptSettings {
    /// Characters of context before the first match.
    pub preceding_chars: usize,
    /// Characters of context after the last highlighted match.
    pub following_chars: usize,
    /// Once an excerpt grows past this many characters, no further matches are highlighted.
    pub max_chars: usize,
    /// Marker inserted before each match.
    pub highlight_open: String,
    /// Marker inserted after each match.
    pub highlight_close: String,
}

impl Default for ExcerptSettings {
    fn default() -> Self {
        Self {
            preceding_chars: DEFAULT_PRECEDING_CHARS,
            following_chars: DEFAULT_FOLLOWING_CHARS,
            max_chars: DEFAULT_MAX_EXCERPT_CHARS,
            highlight_open: String::from("<<"),
            highlight_close: String::from(">>"),
        }
    }
}

/// Term expansion settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExpansionSettings {
    /// Whether terms also match their English plural/singular forms.
    pub plurals: bool,
    /// Resolved path to a pipe-separated synonym file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synonyms_file: Option<PathBuf>,
    /// Inline synonym sets, lowest precedence first.
    pub synonyms: Vec<Vec<String>>,
}

impl Default for ExpansionSettings {
    fn default() -> Self {
        Self {
            plurals: true,
            synonyms_file: None,
            synonyms: Vec::new(),
        }
    }
}

/// Borrowed view of the settings for TOML output.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Proximity search settings.
    search: &'a SearchSettings,
    /// Excerpt settings.
    excerpt: &'a ExcerptSettings,
    /// Expansion settings.
    expansion: &'a ExpansionSettings,
}
