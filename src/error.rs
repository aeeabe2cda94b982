//! Error types for the bike-share explorer
//!
//! Provides structured error handling with context and proper error chains.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the explorer
#[derive(Error, Debug)]
pub enum BikeshareError {
    /// A city's source file could not be opened or read
    #[error("Failed to load {city} data from {path}: {message}")]
    Load {
        city: String,
        path: PathBuf,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A row of a source file is malformed
    #[error("Malformed record in {path} at row {row}: {message}")]
    Parse {
        path: PathBuf,
        row: u64,
        message: String,
    },

    /// Reading from or writing to the terminal failed
    #[error("Terminal I/O error: {operation} failed")]
    Input {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// The input stream ended while a prompt was waiting for an answer
    #[error("Input closed while waiting for an answer")]
    InputClosed,

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl BikeshareError {
    /// Create a new load error with an underlying cause
    pub fn load<P: Into<PathBuf>>(
        city: impl Into<String>,
        path: P,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Load {
            city: city.into(),
            path: path.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new load error without an underlying cause
    pub fn load_message<P: Into<PathBuf>>(
        city: impl Into<String>,
        path: P,
        message: impl Into<String>,
    ) -> Self {
        Self::Load {
            city: city.into(),
            path: path.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a new parse error for a data row
    pub fn parse<P: Into<PathBuf>>(path: P, row: u64, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            row,
            message: message.into(),
        }
    }

    /// Create a new terminal I/O error
    pub fn input(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Input {
            operation: operation.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Whether this error stops loading a city's data set
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::Load { .. } | Self::Parse { .. })
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, BikeshareError>;
