//! Error types for lessondeck

use thiserror::Error;

/// Main error type for lessondeck operations
#[derive(Error, Debug)]
pub enum LessondeckError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog error (unknown module, bad catalog file)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Progress store error
    #[error("Progress store error: {0}")]
    Progress(String),

    /// A lesson or template source could not be fetched.
    /// Carries the name of the missing resource for display.
    #[error("Content not available: {0}")]
    Content(String),
}

/// Result type alias for lessondeck operations
pub type Result<T> = std::result::Result<T, LessondeckError>;
