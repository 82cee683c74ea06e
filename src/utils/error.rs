//! Error types for Sigview
//!
//! This module defines custom error types used throughout the application.
//! We use thiserror for convenient error type definitions and anyhow for
//! application-level error handling.

use thiserror::Error;

/// Main error type for Sigview
#[derive(Error, Debug)]
pub enum SigviewError {
    /// Window-related errors
    #[error("Window error: {0}")]
    Window(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session persistence errors
    #[error("Session error: {0}")]
    Session(String),

    /// File I/O errors
    #[error("File error: {0}")]
    FileIO(#[from] std::io::Error),

    /// Invalid input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error for unexpected situations
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for Results in Sigview
pub type Result<T> = std::result::Result<T, SigviewError>;

/// Extension trait for converting other errors to SigviewError
pub trait IntoShellError<T> {
    /// Convert this error into a SigviewError with the given context
    fn window_err(self, context: &str) -> Result<T>;
    fn config_err(self, context: &str) -> Result<T>;
    fn session_err(self, context: &str) -> Result<T>;
}

impl<T, E: std::fmt::Display> IntoShellError<T> for std::result::Result<T, E> {
    fn window_err(self, context: &str) -> Result<T> {
        self.map_err(|e| SigviewError::Window(format!("{}: {}", context, e)))
    }

    fn config_err(self, context: &str) -> Result<T> {
        self.map_err(|e| SigviewError::Config(format!("{}: {}", context, e)))
    }

    fn session_err(self, context: &str) -> Result<T> {
        self.map_err(|e| SigviewError::Session(format!("{}: {}", context, e)))
    }
}
