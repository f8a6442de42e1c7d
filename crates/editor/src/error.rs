// Chunk: docs/chunks/editor_state - Session-level errors
//! Error types for file and configuration I/O.
//!
//! Buffer and layout operations never fail; only the edges that touch the
//! file system return these.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from opening or saving a document.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no file path bound to this document")]
    NoFilePath,
}

/// Errors from loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result alias for document operations.
pub type EditorResult<T> = Result<T, EditorError>;
