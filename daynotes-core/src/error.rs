//! Error types for the daynotes ecosystem.

use thiserror::Error;

/// Errors that can occur in daynotes operations.
#[derive(Error, Debug)]
pub enum NotesError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Malformed notes document: {0}")]
    MalformedDocument(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for daynotes operations.
pub type NotesResult<T> = Result<T, NotesError>;
