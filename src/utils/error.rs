//! Error handling for the outer surfaces (CLI, bindings)
//!
//! Conversion itself cannot fail; these errors cover reading input,
//! writing output and serializing reports.

use std::fmt;

/// Shortex error type
#[derive(Debug)]
pub enum ShortexError {
    /// Reading input or writing output failed
    Io {
        message: String,
        path: Option<String>,
    },
    /// A report could not be serialized
    Serialization { message: String },
    /// Input bytes were not valid UTF-8
    InvalidInput { message: String },
}

impl fmt::Display for ShortexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortexError::Io { message, path } => {
                if let Some(p) = path {
                    write!(f, "IO error ({}): {}", p, message)
                } else {
                    write!(f, "IO error: {}", message)
                }
            }
            ShortexError::Serialization { message } => {
                write!(f, "Serialization error: {}", message)
            }
            ShortexError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
        }
    }
}

impl std::error::Error for ShortexError {}

impl From<std::io::Error> for ShortexError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::InvalidData {
            return ShortexError::invalid(err.to_string());
        }
        ShortexError::Io {
            message: err.to_string(),
            path: None,
        }
    }
}

impl From<serde_json::Error> for ShortexError {
    fn from(err: serde_json::Error) -> Self {
        ShortexError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Result type for the outer surfaces
pub type ShortexResult<T> = Result<T, ShortexError>;

impl ShortexError {
    pub fn io_at(err: std::io::Error, path: impl Into<String>) -> Self {
        ShortexError::Io {
            message: err.to_string(),
            path: Some(path.into()),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        ShortexError::InvalidInput {
            message: message.into(),
        }
    }
}
