//! Error handling utilities shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Convenient result type used throughout the crate.
pub type Result<T, E = WfreqError> = std::result::Result<T, E>;

/// Domain-specific error describing failures during configuration or input acquisition.
///
/// The counting pipeline itself has no failure path: tokenization accepts any
/// string and segmentation accepts any length/worker-count combination once the
/// configuration has been validated. Every variant here is detected at the
/// boundary, before any parallel work is spawned.
#[derive(Debug, Error)]
pub enum WfreqError {
    /// Counter configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Filesystem IO error with optional context path.
    #[error("io error while processing {path:?}: {source}")]
    Io {
        /// Underlying IO error returned by the standard library.
        source: std::io::Error,
        /// Target path associated with the IO failure if available.
        path: Option<PathBuf>,
    },
    /// The input file exists but contains no text.
    #[error("input file {0:?} is empty")]
    EmptyCorpus(PathBuf),
}

impl WfreqError {
    /// Helper constructor that attaches an optional path when wrapping IO errors.
    pub fn io(source: std::io::Error, path: Option<PathBuf>) -> Self {
        Self::Io { source, path }
    }
}
