//! Synonym tables.
//!
//! The file format is one equivalence set per line, members separated by `|`:
//!
//! ```text
//! # vehicles
//! car|automobile|auto
//! sec|section
//! ```
//!
//! Each member maps to the whole set. Synonyms are expanded before inflection, so a set should
//! list the forms that tokenized query terms take (no trailing periods).

use std::{collections::HashMap, fs, path::Path};

use crate::{ExpandError, TermExpander};

/// Lookup from a lower-cased term to its equivalence set.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    /// Member -> full set, in declaration order.
    sets: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an equivalence set.
    ///
    /// Members are trimmed and lower-cased; empty members are ignored. A member that already
    /// belongs to an earlier set is remapped to this one.
    pub fn add_set<I, S>(&mut self, members: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: Vec<String> = members
            .into_iter()
            .map(|m| m.as_ref().trim().to_lowercase())
            .filter(|m| !m.is_empty())
            .collect();

        for member in &set {
            self.sets.insert(member.clone(), set.clone());
        }
    }

    /// Parses a table from pipe-separated lines.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn parse(contents: &str) -> Self {
        let mut table = Self::new();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            table.add_set(line.split('|'));
        }
        table
    }

    /// Loads a table from a file.
    pub fn load(path: &Path) -> Result<Self, ExpandError> {
        let contents = fs::read_to_string(path).map_err(|source| ExpandError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&contents))
    }

    /// Adds every set from `other`; its mappings replace existing ones for shared members.
    pub fn merge(&mut self, other: Self) {
        self.sets.extend(other.sets);
    }

    /// Returns the number of distinct members.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl TermExpander for SynonymTable {
    fn expand(&self, term: &str) -> Vec<String> {
        match self.sets.get(term) {
            Some(set) => set.clone(),
            None => vec![term.to_string()],
        }
    }
}
