//! Error types for term expansion sources.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading expansion data.
#[derive(Debug, Error)]
pub enum ExpandError {
    /// Failed to read a synonym file.
    #[error("failed to read synonym file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
