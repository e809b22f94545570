//! Filesystem fixtures for kwic-config unit tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::discovery::CONFIG_FILENAME;

/// A throwaway directory tree, removed on drop.
pub struct TestDir {
    /// Backing temporary directory.
    root: TempDir,
}

impl TestDir {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// Returns the tree root.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates `rel_path` and any missing parents.
    pub fn create_dir(&self, rel_path: &str) -> PathBuf {
        let path = self.path().join(rel_path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Writes a file, creating parent directories as needed.
    pub fn create_file(&self, rel_path: &str, content: &str) -> PathBuf {
        let path = self.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Writes `.kwic.toml` into `rel_dir` (`""` for the root).
    pub fn write_config(&self, rel_dir: &str, content: &str) -> PathBuf {
        self.create_file(
            &Path::new(rel_dir).join(CONFIG_FILENAME).to_string_lossy(),
            content,
        )
    }
}
