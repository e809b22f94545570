//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`, applying precedence
//! rules and resolving paths.

use std::path::{Path, PathBuf};

use crate::{
    Config, ConfigError, ExcerptSettings, ExpansionSettings, SearchSettings,
    parse::{RawConfig, RawExcerptSettings, RawExpansionSettings, RawSearchSettings},
    resolve::resolve_config_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory that relative paths in this config are resolved against.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - Synonym file: first defined path wins, resolved against its own config directory
/// - Inline synonym sets: concatenated, lowest precedence first, so closer sets win conflicts
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let search = merge_search_settings(configs);
    let excerpt = merge_excerpt_settings(configs);
    let expansion = merge_expansion_settings(configs)?;
    let config_root = configs.first().map(|c| c.dir().to_path_buf());

    Ok(Config {
        search,
        excerpt,
        expansion,
        config_root,
    })
}

/// Merges search settings.
fn merge_search_settings(configs: &[ParsedConfig]) -> SearchSettings {
    let mut result = SearchSettings::default();

    // Lowest precedence first so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref search) = parsed.config.search {
            apply_raw_search(&mut result, search);
        }
    }

    result
}

/// Applies raw search settings to result.
fn apply_raw_search(result: &mut SearchSettings, raw: &RawSearchSettings) {
    if let Some(v) = raw.match_window {
        result.match_window = v;
    }
    if let Some(v) = raw.max_hits {
        result.max_hits = v;
    }
}

/// Merges excerpt settings.
fn merge_excerpt_settings(configs: &[ParsedConfig]) -> ExcerptSettings {
    let mut result = ExcerptSettings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref excerpt) = parsed.config.excerpt {
            apply_raw_excerpt(&mut result, excerpt);
        }
    }

    result
}

/// Applies raw excerpt settings to result.
fn apply_raw_excerpt(result: &mut ExcerptSettings, raw: &RawExcerptSettings) {
    if let Some(v) = raw.preceding_chars {
        result.preceding_chars = v;
    }
    if let Some(v) = raw.following_chars {
        result.following_chars = v;
    }
    if let Some(v) = raw.max_chars {
        result.max_chars = v;
    }
    if let Some(ref v) = raw.highlight_open {
        result.highlight_open = v.clone();
    }
    if let Some(ref v) = raw.highlight_close {
        result.highlight_close = v.clone();
    }
}

/// Merges expansion settings, resolving the synonym file path.
fn merge_expansion_settings(configs: &[ParsedConfig]) -> Result<ExpansionSettings, ConfigError> {
    let mut result = ExpansionSettings::default();

    for parsed in configs.iter().rev() {
        let Some(ref expansion) = parsed.config.expansion else {
            continue;
        };
        apply_raw_expansion(&mut result, expansion, parsed.dir())?;
    }

    Ok(result)
}

/// Applies raw expansion settings to result.
fn apply_raw_expansion(
    result: &mut ExpansionSettings,
    raw: &RawExpansionSettings,
    config_dir: &Path,
) -> Result<(), ConfigError> {
    if let Some(v) = raw.plurals {
        result.plurals = v;
    }
    if let Some(ref path) = raw.synonyms_file {
        result.synonyms_file = Some(resolve_config_path(path, config_dir)?);
    }
    if let Some(ref sets) = raw.synonyms {
        result.synonyms.extend(sets.iter().cloned());
    }
    Ok(())
}
