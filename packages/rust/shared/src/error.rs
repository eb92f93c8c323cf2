//! Error types for vstheme.
//!
//! Library crates use [`VsthemeError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all vstheme operations.
#[derive(Debug, thiserror::Error)]
pub enum VsthemeError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Filesystem I/O error (missing, unreadable, or unwritable file).
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Malformed JSON in a color definitions file.
    #[error("parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Malformed JSON in color definitions supplied as text rather than a file.
    #[error("parse error in color definitions: {source}")]
    InvalidJson { source: serde_json::Error },

    /// Color definitions parsed, but the top-level value is not an object.
    #[error("invalid color definitions: {message}")]
    InvalidShape { message: String },

    /// Encoding the merged output failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing the CSV table export failed.
    #[error("CSV export error: {0}")]
    Csv(String),
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, VsthemeError>;

impl VsthemeError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a shape error from any displayable message.
    pub fn invalid_shape(msg: impl Into<String>) -> Self {
        Self::InvalidShape {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a CSV export error from any displayable message.
    pub fn csv(msg: impl std::fmt::Display) -> Self {
        Self::Csv(msg.to_string())
    }

    /// Wrap a `serde_json::Error` raised while parsing the file at `path`.
    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
