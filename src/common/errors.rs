use std::path::PathBuf;
use thiserror::Error;

/// Typed errors for CleanSweep operations.
/// `anyhow` handles the CLI boundary; these let library modules be
/// precise about failures that callers may want to match on.
#[derive(Debug, Error)]
pub enum SweepError {
    /// File system operation failed
    #[error("I/O error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Permission denied accessing a path
    #[error("Permission denied: '{path}'. {hint}")]
    PermissionDenied { path: PathBuf, hint: String },

    /// Refusing to touch a protected path
    #[error("Protected path (will not modify): '{path}'")]
    Protected { path: PathBuf },

    /// Configuration file is invalid
    #[error("Config error in '{path}': {message}")]
    Config { path: PathBuf, message: String },

    /// A scan root is missing or unreadable
    #[error("Cannot scan '{path}': {reason}")]
    UnreadableRoot { path: PathBuf, reason: String },

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}
