//! Error types for appiumize core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for appiumize operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised outside the engine's structured results.
#[derive(Debug, Error)]
pub enum Error {
    /// A platform name that is neither `android` nor `ios`.
    #[error("Unsupported platform: {value} (expected android or ios)")]
    UnknownPlatform {
        /// The rejected value.
        value: String,
    },

    /// An input file does not exist.
    #[error("Input file not found: {path}")]
    InputNotFound {
        /// Path to the missing input.
        path: PathBuf,
    },

    /// An output path could not be derived from the input path.
    #[error("Invalid path {path:?}: {reason}")]
    InvalidPath {
        path: PathBuf,
        reason: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
