//! Error types for the movie console.
//!
//! Defines the main error enum used throughout the application.

use thiserror::Error;

/// Main error type for console operations.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Database connection errors (file unreadable, pool exhausted, etc.)
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query execution errors (constraint violations, bad SQL, etc.)
    #[error("Query error: {0}")]
    Query(String),

    /// Configuration errors (invalid config file, unusable paths, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal I/O errors (stdin unreadable, stdout closed).
    #[error("I/O error: {0}")]
    Io(String),
}

impl ConsoleError {
    /// Creates a connection error with the given message.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a query error with the given message.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an I/O error with the given message.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Connection(_) => "Connection Error",
            Self::Query(_) => "Query Error",
            Self::Config(_) => "Configuration Error",
            Self::Io(_) => "I/O Error",
        }
    }

    /// Returns true if the console cannot keep running after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Connection(_))
    }
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias using ConsoleError.
pub type Result<T> = std::result::Result<T, ConsoleError>;
