//! Error types for generator invocations.
//!
//! Only structural problems are errors: a payload that does not clean down
//! to a mapping, or a payload file that cannot be read or parsed. Every
//! recoverable condition (missing record, missing required field, no
//! eligible devices) is absorbed as a logged early return and never
//! surfaces here.

use std::io;
use thiserror::Error;

/// Result type alias for generator operations.
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Errors that can abort a generator invocation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Cleaned input is not a mapping, or is otherwise structurally unusable.
    #[error("Invalid generator payload: {message}")]
    Payload {
        /// Description of the structural problem.
        message: String,
    },

    /// Failed to read a payload file.
    #[error("Failed to read payload file '{path}': {source}")]
    Io {
        /// The file that could not be read.
        path: String,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// Payload file contained malformed JSON.
    #[error("Failed to parse payload JSON: {source}")]
    Json {
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Internal error (unexpected state).
    #[error("Internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl GeneratorError {
    /// Creates a payload error.
    pub fn payload(message: impl Into<String>) -> Self {
        Self::Payload {
            message: message.into(),
        }
    }

    /// Creates an IO error for a payload file.
    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for GeneratorError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json { source }
    }
}
