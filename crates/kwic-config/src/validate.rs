//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::fmt;

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The configured synonym file does not exist.
    SynonymsFileMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// `max_hits` is zero, so every search returns nothing.
    ZeroMaxHits,
    /// `match_window` is zero, so multi-clause queries only match overlapping terms.
    ZeroMatchWindow,
    /// Both highlight markers are empty, so matches are not visible in excerpts.
    EmptyHighlightMarker,
    /// An inline synonym set has fewer than two members.
    TrivialSynonymSet {
        /// Position of the set in the merged list.
        index: usize,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SynonymsFileMissing { path } => {
                write!(f, "synonyms file does not exist: {path}")
            }
            Self::ZeroMaxHits => write!(f, "search.max_hits is 0; searches will return nothing"),
            Self::ZeroMatchWindow => write!(
                f,
                "search.match_window is 0; clauses must touch the anchor match"
            ),
            Self::EmptyHighlightMarker => {
                write!(f, "excerpt highlight markers are empty; matches will not stand out")
            }
            Self::TrivialSynonymSet { index } => {
                write!(f, "expansion.synonyms[{index}] has fewer than two members")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if let Some(ref path) = config.expansion.synonyms_file
        && !path.is_file()
    {
        warnings.push(ConfigWarning::SynonymsFileMissing {
            path: path.display().to_string(),
        });
    }

    if config.search.max_hits == 0 {
        warnings.push(ConfigWarning::ZeroMaxHits);
    }

    if config.search.match_window == 0 {
        warnings.push(ConfigWarning::ZeroMatchWindow);
    }

    if config.excerpt.highlight_open.is_empty() && config.excerpt.highlight_close.is_empty() {
        warnings.push(ConfigWarning::EmptyHighlightMarker);
    }

    for (index, set) in config.expansion.synonyms.iter().enumerate() {
        if set.len() < 2 {
            warnings.push(ConfigWarning::TrivialSynonymSet { index });
        }
    }

    warnings
}
