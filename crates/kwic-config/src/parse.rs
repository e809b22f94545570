//! Configuration file parsing.
//!
//! Parses individual `.kwic.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use serde::Deserialize;
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Proximity search section.
    pub search: Option<RawSearchSettings>,
    /// Excerpt rendering section.
    pub excerpt: Option<RawExcerptSettings>,
    /// Term expansion section.
    pub expansion: Option<RawExpansionSettings>,
}

/// Raw search settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSearchSettings {
    /// Proximity radius in characters.
    pub match_window: Option<usize>,
    /// Maximum hits per query.
    pub max_hits: Option<usize>,
}

/// Raw excerpt settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawExcerptSettings {
    /// Characters of context before the first match.
    pub preceding_chars: Option<usize>,
    /// Characters of context after the last match.
    pub following_chars: Option<usize>,
    /// Soft cap on excerpt length.
    pub max_chars: Option<usize>,
    /// Marker inserted before each match.
    pub highlight_open: Option<String>,
    /// Marker inserted after each match.
    pub highlight_close: Option<String>,
}

/// Raw expansion settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawExpansionSettings {
    /// Whether to widen terms to their plural forms.
    pub plurals: Option<bool>,
    /// Synonym file, relative to the config file's directory.
    pub synonyms_file: Option<String>,
    /// Inline synonym sets.
    pub synonyms: Option<Vec<Vec<String>>>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context (tests only).
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
