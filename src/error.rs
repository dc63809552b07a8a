//! Error types for quicktodo.

use thiserror::Error;

/// All errors surfaced by the task tracker.
///
/// Date phrases that fail to resolve are not errors: the parser keeps the
/// literal text in the title instead.
#[derive(Debug, Error)]
pub enum TodoError {
    /// The input contained no title text once tags and the due date were removed.
    #[error("Please provide a title for the task")]
    EmptyTitle,

    /// A task id did not match any stored task.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The storage layer failed. Writes are transactional, so nothing partial is left behind.
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration or data directory problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A command-line value could not be interpreted.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl TodoError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::EmptyTitle | Self::InvalidArgument(_) => 2,
            Self::NotFound(_) => 3,
            Self::Database(_) | Self::Config(_) | Self::Io(_) | Self::Parse(_) => 1,
        }
    }
}
