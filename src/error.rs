//! Error types for the wnquery library.
//!
//! All fallible operations return [`WordNetError`] through the crate-wide
//! [`Result`] alias. Recoverable anomalies found while building the index
//! (duplicate ids, dangling relation targets, ...) are not errors: they are
//! reported as [`Diagnostic`](crate::index::diagnostics::Diagnostic) events.
//!
//! # Examples
//!
//! ```
//! use wnquery::error::{Result, WordNetError};
//! use wnquery::synset::PartOfSpeech;
//!
//! fn parse(tag: &str) -> Result<PartOfSpeech> {
//!     tag.parse()
//! }
//!
//! match parse("x") {
//!     Err(WordNetError::InvalidPartOfSpeech(tag)) => assert_eq!(tag, "x"),
//!     _ => unreachable!(),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for wnquery operations.
#[derive(Error, Debug)]
pub enum WordNetError {
    /// I/O errors while reading a source file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A part-of-speech tag outside of n, v, a, b.
    #[error("Invalid POS '{0}'")]
    InvalidPartOfSpeech(String),

    /// The ingestion stream could not be decoded.
    #[error("Ingestion error at line {line}: {message}")]
    Ingest { line: usize, message: String },

    /// Invalid operation for the current state (e.g. inverting twice).
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// A recursive query went deeper than the configured cap.
    #[error("Traversal from synset {id} exceeded the depth limit of {depth}")]
    TraversalLimit { id: String, depth: usize },

    /// A recursive query reached a synset already on its current path.
    #[error("Cycle detected at synset {id} while following '{relation}'")]
    CycleDetected { id: String, relation: String },

    /// Configuration errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with WordNetError.
pub type Result<T> = std::result::Result<T, WordNetError>;

impl WordNetError {
    /// Create a new invalid part-of-speech error.
    pub fn invalid_pos<S: Into<String>>(tag: S) -> Self {
        WordNetError::InvalidPartOfSpeech(tag.into())
    }

    /// Create a new ingestion error for the given input line.
    pub fn ingest<S: Into<String>>(line: usize, msg: S) -> Self {
        WordNetError::Ingest {
            line,
            message: msg.into(),
        }
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        WordNetError::InvalidOperation(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        WordNetError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WordNetError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = WordNetError::invalid_pos("q");
        assert_eq!(error.to_string(), "Invalid POS 'q'");

        let error = WordNetError::ingest(12, "unexpected end of record");
        assert_eq!(
            error.to_string(),
            "Ingestion error at line 12: unexpected end of record"
        );

        let error = WordNetError::TraversalLimit {
            id: "n1".to_string(),
            depth: 3,
        };
        assert_eq!(
            error.to_string(),
            "Traversal from synset n1 exceeded the depth limit of 3"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = WordNetError::from(io_error);

        match error {
            WordNetError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
